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

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::pieces::{validate_position, PieceError, PieceType, PositionError, Position};

/// A piece of some [`PieceType`] standing at a [`Position`].
///
/// The type is shared with every other piece of the same kind and never changes. The
/// position is a plain value: it is copied in and out, so nothing outside the piece can
/// alter it except through [`set_position`][Piece::set_position].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Piece {
    #[serde(rename = "type")]
    piece_type: Arc<PieceType>,
    position: Position,
}

impl Piece {
    /// Create a piece of the given type at the given position. Fails if either axis of
    /// the position is negative.
    pub fn new(piece_type: Arc<PieceType>, position: Position) -> Result<Self, PositionError> {
        validate_position(position)?;
        Ok(Self {
            piece_type,
            position,
        })
    }

    /// Build a piece from a raw `{ "type": {...}, "position": {...} }` record.
    ///
    /// The type is validated before the position, using the same rules as
    /// [`PieceType::from_props`] and [`Position::from_value`].
    pub fn from_value(value: &Value) -> Result<Self, PieceError> {
        let fields = value.as_object().ok_or(PieceError::InvalidArgument)?;
        let piece_type = PieceType::from_props(fields.get("type").unwrap_or(&Value::Null))
            .map_err(|cause| PieceError::InvalidType { cause })?;
        let position = Position::from_value(fields.get("position"))?;
        Ok(Self {
            piece_type: Arc::new(piece_type),
            position,
        })
    }

    /// The type of this piece.
    pub fn piece_type(&self) -> &Arc<PieceType> {
        &self.piece_type
    }

    /// The current position of this piece.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Replace the position of this piece. The new position is checked the same way as in
    /// [`Piece::new`]; on failure the previous position is kept.
    ///
    /// A piece that is on a [`Board`][crate::Board] is owned by that board, so this cannot
    /// desynchronize board occupancy; use [`Board::move_piece`][crate::Board::move_piece]
    /// to relocate placed pieces.
    pub fn set_position(&mut self, position: Position) -> Result<(), PositionError> {
        validate_position(position)?;
        self.position = position;
        Ok(())
    }

    /// Set the position without validation. Callers must have already checked that the
    /// position lies on a board.
    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }
}
