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

//! Errors raised while validating positions, piece types and pieces.

use thiserror::Error;

/// Reason a position was rejected. Row problems are always reported before column
/// problems.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PositionError {
    /// No position was supplied.
    #[error("position is required")]
    MissingPosition,
    /// The supplied position was not a record.
    #[error("position must be an object")]
    InvalidArgument,
    /// The row was missing or not an integer.
    #[error("position.row must be numeric")]
    NonNumericRow,
    /// The column was missing or not an integer.
    #[error("position.column must be numeric")]
    NonNumericColumn,
    /// The row was below zero.
    #[error("position.row must be nonnegative")]
    NegativeRow {
        /// The rejected row.
        row: i64,
    },
    /// The column was below zero.
    #[error("position.column must be nonnegative")]
    NegativeColumn {
        /// The rejected column.
        column: i64,
    },
}

/// Reason a set of piece type properties was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PieceTypeError {
    /// The properties were missing or were not a record.
    #[error("props is required and must be an object")]
    InvalidArgument,
    /// `power` or `speed` was missing, not a number, or negative.
    #[error("props.{property} must be numeric and nonnegative")]
    InvalidProperty {
        /// Either `"power"` or `"speed"`.
        property: &'static str,
    },
    /// One of the descriptive fields was present but not a string.
    #[error("props.{field} must be a string")]
    NonStringField {
        /// Name of the offending field as it appears in the raw data.
        field: &'static str,
    },
}

/// Reason a piece could not be built or repositioned.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PieceError {
    /// The raw piece was not a record.
    #[error("props is required and must be an object")]
    InvalidArgument,
    /// The piece's type was missing or not a valid piece type.
    #[error("type must be a valid piece type")]
    InvalidType {
        /// Why the type was rejected.
        #[source]
        cause: PieceTypeError,
    },
    /// The piece's position was rejected.
    #[error(transparent)]
    Position(#[from] PositionError),
}
