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

//! Errors used by the [`Board`][crate::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::pieces::{Piece, Position};

/// One of the two axes of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    Height,
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Axis::Height => "height",
            Axis::Width => "width",
        })
    }
}

/// Error returned when a board is created with an unusable size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{axis} is required and must be positive")]
pub struct DimensionError {
    /// The axis that was rejected.
    axis: Axis,
}

impl DimensionError {
    pub(super) fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// The axis whose size was rejected.
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

/// Error returned when a position does not lie on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("Row {row}, column {column} is an invalid position")]
pub struct OutOfBoundsError {
    row: i64,
    column: i64,
}

impl OutOfBoundsError {
    pub(super) fn new(position: Position) -> Self {
        Self {
            row: position.row,
            column: position.column,
        }
    }

    /// The position that was rejected.
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }
}

/// Reason why a piece could not be added to the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotAddReason {
    /// The piece's position is outside of the board.
    OutOfBounds,
    /// Another piece already occupies the piece's position.
    CellOccupied,
}

/// Error returned when adding a piece fails. Hands the rejected piece back.
pub struct AddPieceError {
    reason: CannotAddReason,
    piece: Piece,
}

impl AddPieceError {
    pub(super) fn new(reason: CannotAddReason, piece: Piece) -> Self {
        Self { reason, piece }
    }

    /// Get the reason the piece was not added.
    pub fn reason(&self) -> CannotAddReason {
        self.reason
    }

    /// The piece that was not added.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Extract the rejected piece from this error.
    pub fn into_piece(self) -> Piece {
        self.piece
    }
}

impl fmt::Display for AddPieceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Position { row, column } = self.piece.position();
        match self.reason {
            CannotAddReason::OutOfBounds => {
                write!(f, "Row {}, column {} is an invalid position", row, column)
            }
            CannotAddReason::CellOccupied => {
                write!(f, "Piece is already present at row {}, column {}", row, column)
            }
        }
    }
}

impl Debug for AddPieceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for AddPieceError {}

impl From<AddPieceError> for Piece {
    /// Allows retrieving the rejected piece from the error with into.
    fn from(err: AddPieceError) -> Self {
        err.into_piece()
    }
}

/// Error returned when a piece could not be moved.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MoveError {
    /// The source or destination is outside of the board.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
    /// There is no piece at the source position.
    #[error("No piece is present at row {row}, column {column}")]
    EmptyCell { row: i64, column: i64 },
    /// The destination is occupied by another piece.
    #[error("Piece is already present at row {row}, column {column}")]
    CellOccupied { row: i64, column: i64 },
}

/// Error returned when building a board together with its initial pieces.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    InvalidDimension(#[from] DimensionError),
    #[error(transparent)]
    AddPiece(#[from] AddPieceError),
}
