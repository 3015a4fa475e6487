// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Board and piece model for turn-based grid games.
//!
//! [`catalog`] holds the immutable [`PieceType`]s available to a game, loaded once from
//! descriptor data and shared through the factories in that module.
//!
//! [`pieces`] defines [`Position`], [`PieceType`] and [`Piece`], the values that get
//! placed on a board.
//!
//! [`board`] provides the fixed-size [`Board`] which enforces bounds and single
//! occupancy on every mutation.

pub mod board;
pub mod catalog;
pub mod pieces;

pub use crate::{
    board::Board,
    catalog::{Catalog, PieceFactory, PieceTypeFactory},
    pieces::{Piece, PieceType, Position},
};
