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

//! Cell storage behind the [`Board`][crate::Board].

use std::collections::BTreeMap;

use crate::{
    board::Dimensions,
    pieces::{Piece, Position},
};

/// Occupied cells of a board, keyed by row-major linear index. Empty cells take no
/// storage, so the size of a board does not affect how much memory it uses.
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Pieces on this board, iterated in row-major order.
    pub(super) cells: BTreeMap<usize, Piece>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        Self {
            dim,
            cells: BTreeMap::new(),
        }
    }

    /// Get the contents of the cell at the given [`Position`]. Returns `None` if the
    /// position is off the board.
    pub(super) fn get(&self, position: Position) -> Option<Option<&Piece>> {
        self.dim
            .try_linearize(position)
            .map(|i| self.cells.get(&i))
    }
}
