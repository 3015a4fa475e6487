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

//! Errors used by the [`Catalog`][crate::Catalog] and its factories.

use thiserror::Error;

use crate::pieces::{PieceTypeError, PositionError};

/// Error returned when a catalog cannot be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data was not a JSON array of records.
    #[error("could not parse piece type catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// A descriptor failed piece type validation.
    #[error("piece type descriptor {index} is invalid: {source}")]
    InvalidDescriptor {
        /// Position of the descriptor in the catalog data.
        index: usize,
        source: PieceTypeError,
    },
    /// A descriptor had no name or an empty name.
    #[error("piece type descriptor {index} has no name")]
    MissingName { index: usize },
    /// Two descriptors used the same name.
    #[error("piece type {name:?} is defined more than once")]
    DuplicateName { name: String },
}

/// Error returned when a factory is asked for a name that is not in its catalog.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("Invalid piece type")]
pub struct UnknownPieceType {
    name: String,
}

impl UnknownPieceType {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned by [`PieceFactory::create_piece`][crate::PieceFactory::create_piece].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CreatePieceError {
    #[error(transparent)]
    UnknownPieceType(#[from] UnknownPieceType),
    #[error(transparent)]
    Position(#[from] PositionError),
}
