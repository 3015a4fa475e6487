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

//! The game board.

use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use crate::pieces::{Piece, Position};

use self::grid::Grid;
pub use self::{
    dimensions::Dimensions,
    errors::{
        AddPieceError, Axis, BoardError, CannotAddReason, DimensionError, MoveError,
        OutOfBoundsError,
    },
};

mod dimensions;
mod errors;
mod grid;

/// A fixed-size grid holding at most one [`Piece`] per cell.
///
/// The board owns the pieces placed on it. Positions are checked against the board's
/// [`Dimensions`] on every lookup and mutation, and a piece can only be placed on an
/// empty cell.
#[derive(Debug)]
pub struct Board {
    /// Cells occupied by pieces.
    grid: Grid,
}

impl Board {
    /// Create an empty board with the given height and width. Both must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self, DimensionError> {
        let dim = Dimensions::try_new(height, width)?;
        debug!(height, width, "created board");
        Ok(Self {
            grid: Grid::new(dim),
        })
    }

    /// Create a board and add each of `pieces` in order. Stops at the first piece that
    /// cannot be added.
    pub fn with_pieces<I>(height: usize, width: usize, pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Self::new(height, width)?;
        board.add_pieces(pieces)?;
        Ok(board)
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of rows on this board.
    pub fn height(&self) -> usize {
        self.grid.dim.height()
    }

    /// Number of columns on this board.
    pub fn width(&self) -> usize {
        self.grid.dim.width()
    }

    /// Returns true if the row is in `[0, height)` and the column is in `[0, width)`.
    pub fn is_position_valid(&self, position: Position) -> bool {
        self.grid.dim.contains(position)
    }

    /// Place a piece on the board at its current position. If the position is off the
    /// board or already occupied, the piece is handed back in the error.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), AddPieceError> {
        let position = piece.position();
        let idx = match self.grid.dim.try_linearize(position) {
            Some(idx) => idx,
            None => return Err(AddPieceError::new(CannotAddReason::OutOfBounds, piece)),
        };
        match self.grid.cells.entry(idx) {
            Entry::Occupied(_) => Err(AddPieceError::new(CannotAddReason::CellOccupied, piece)),
            Entry::Vacant(cell) => {
                debug!(
                    piece_type = piece.piece_type().name(),
                    row = position.row,
                    column = position.column,
                    "added piece"
                );
                cell.insert(piece);
                Ok(())
            }
        }
    }

    /// Add each of `pieces` in order. Not transactional: if a piece fails, the pieces
    /// before it stay on the board and the remaining ones are not added.
    pub fn add_pieces<I>(&mut self, pieces: I) -> Result<(), AddPieceError>
    where
        I: IntoIterator<Item = Piece>,
    {
        pieces.into_iter().try_for_each(|piece| self.add_piece(piece))
    }

    /// Get the piece at the given position. An empty cell is `Ok(None)`; a position off
    /// the board is an error.
    pub fn get_piece_at(&self, position: Position) -> Result<Option<&Piece>, OutOfBoundsError> {
        trace!(row = position.row, column = position.column, "looking up piece");
        self.grid
            .get(position)
            .ok_or_else(|| OutOfBoundsError::new(position))
    }

    /// Move the piece at `from` to the empty cell `to`, updating the piece's position.
    /// Moving a piece onto its own cell succeeds without change.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<(), MoveError> {
        let from_idx = self.linearize(from)?;
        let to_idx = self.linearize(to)?;
        if !self.grid.cells.contains_key(&from_idx) {
            return Err(MoveError::EmptyCell {
                row: from.row,
                column: from.column,
            });
        }
        if from_idx == to_idx {
            return Ok(());
        }
        if self.grid.cells.contains_key(&to_idx) {
            return Err(MoveError::CellOccupied {
                row: to.row,
                column: to.column,
            });
        }
        // The source is occupied and the destination is empty, so the piece is always
        // found here and the insert never replaces another piece.
        if let Some(mut piece) = self.grid.cells.remove(&from_idx) {
            piece.relocate(to);
            debug!(
                piece_type = piece.piece_type().name(),
                from = %from,
                to = %to,
                "moved piece"
            );
            self.grid.cells.insert(to_idx, piece);
        }
        Ok(())
    }

    /// Take the piece at the given position off the board, returning it if there was one.
    pub fn remove_piece(&mut self, position: Position) -> Result<Option<Piece>, OutOfBoundsError> {
        let idx = self.linearize(position)?;
        let removed = self.grid.cells.remove(&idx);
        if let Some(piece) = &removed {
            debug!(
                piece_type = piece.piece_type().name(),
                row = position.row,
                column = position.column,
                "removed piece"
            );
        }
        Ok(removed)
    }

    /// Get an iterator over all pieces on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.cells.values()
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.grid.cells.len()
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// cells of that row, yielding the piece in each cell if any.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Option<&'a Piece>>> {
        let grid = &self.grid;
        grid.dim
            .iter_positions()
            .map(move |row| row.map(move |position| grid.get(position).flatten()))
    }

    /// Pick a uniformly random unoccupied position. Returns `None` if the board is full.
    #[cfg(feature = "rng_gen")]
    pub fn random_empty_position<R: rand::Rng>(&self, rng: &mut R) -> Option<Position> {
        let free = self.grid.dim.total_size() - self.grid.cells.len();
        if free == 0 {
            return None;
        }
        // Choose the k-th empty cell, stepping over occupied indexes in ascending order.
        let mut idx = rng.gen_range(0, free);
        for &occupied in self.grid.cells.keys() {
            if occupied <= idx {
                idx += 1;
            } else {
                break;
            }
        }
        Some(self.grid.dim.un_linearize(idx))
    }

    /// Linear index of a position, or an error if it is off the board.
    fn linearize(&self, position: Position) -> Result<usize, OutOfBoundsError> {
        self.grid
            .dim
            .try_linearize(position)
            .ok_or_else(|| OutOfBoundsError::new(position))
    }
}
