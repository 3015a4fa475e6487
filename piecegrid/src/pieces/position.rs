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

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pieces::PositionError;

/// Zero-indexed coordinates of a cell on a [`Board`][crate::Board].
///
/// Any pair of integers can be represented so that boards can be asked about positions
/// that lie outside of them. Positions held by a [`Piece`][crate::Piece] are always
/// nonnegative, see [`validate_position`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    /// Row of the cell, counted from the top.
    pub row: i64,
    /// Column of the cell, counted from the left.
    pub column: i64,
}

impl Position {
    /// Construct a [`Position`] from the given `row` and `column`.
    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// Read a position out of raw data, applying the same checks as
    /// [`validate_position`] plus the shape checks that typed input makes unnecessary.
    ///
    /// `None` and `null` are reported as a missing position. The row is checked before
    /// the column at every step.
    pub fn from_value(value: Option<&Value>) -> Result<Self, PositionError> {
        let fields = match value {
            None | Some(Value::Null) => return Err(PositionError::MissingPosition),
            Some(Value::Object(fields)) => fields,
            Some(_) => return Err(PositionError::InvalidArgument),
        };
        let row = fields
            .get("row")
            .and_then(Value::as_i64)
            .ok_or(PositionError::NonNumericRow)?;
        let column = fields
            .get("column")
            .and_then(Value::as_i64)
            .ok_or(PositionError::NonNumericColumn)?;
        let position = Self::new(row, column);
        validate_position(position)?;
        Ok(position)
    }
}

impl From<(i64, i64)> for Position {
    /// Construct a [`Position`] from the given `(row, column)` pair.
    fn from((row, column): (i64, i64)) -> Self {
        Self::new(row, column)
    }
}

impl From<Position> for (i64, i64) {
    /// Convert the [`Position`] into a `(row, column)` pair.
    fn from(position: Position) -> Self {
        (position.row, position.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Check that a position can be held by a piece: both axes must be nonnegative. The row
/// is checked first, so a position negative on both axes reports the row.
pub fn validate_position(position: Position) -> Result<(), PositionError> {
    if position.row < 0 {
        Err(PositionError::NegativeRow { row: position.row })
    } else if position.column < 0 {
        Err(PositionError::NegativeColumn {
            column: position.column,
        })
    } else {
        Ok(())
    }
}
