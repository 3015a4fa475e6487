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

use std::convert::TryFrom;

use crate::{
    board::errors::{Axis, DimensionError},
    pieces::Position,
};

/// Height and width of a [`Board`][crate::Board]. Both are always nonzero and their
/// product fits in a `usize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows. This corresponds to [`Position::row`].
    height: usize,
    /// Number of columns. This corresponds to [`Position::column`].
    width: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified height and width. The height is checked
    /// first. Sizes whose product overflows `usize` are reported against the width.
    pub fn try_new(height: usize, width: usize) -> Result<Self, DimensionError> {
        if height == 0 {
            Err(DimensionError::new(Axis::Height))
        } else if width == 0 {
            Err(DimensionError::new(Axis::Width))
        } else {
            height
                .checked_mul(width)
                .map(|_| Self { height, width })
                .ok_or_else(|| DimensionError::new(Axis::Width))
        }
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if `0 <= row < height` and `0 <= column < width`. This is the only
    /// bounds check; every lookup and mutation on the board goes through it.
    pub fn contains(&self, position: Position) -> bool {
        self.check_bounds(position).is_some()
    }

    /// Convert a position to a linear index. Returns `None` if the position is out of
    /// bounds.
    pub fn try_linearize(&self, position: Position) -> Option<usize> {
        self.check_bounds(position)
            .map(|(row, column)| row * self.width + column)
    }

    /// Get back a position from a linear index. The index must be less than
    /// [`total_size`][Dimensions::total_size].
    pub fn un_linearize(&self, idx: usize) -> Position {
        Position::new((idx / self.width) as i64, (idx % self.width) as i64)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the positions
    /// of that row.
    pub fn iter_positions(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let width = self.width;
        (0..self.height).map(move |row| {
            (0..width).map(move |column| Position::new(row as i64, column as i64))
        })
    }

    /// If `position` is in bounds, return its row and column as indexes.
    #[inline]
    fn check_bounds(&self, position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok().filter(|&r| r < self.height)?;
        let column = usize::try_from(position.column)
            .ok()
            .filter(|&c| c < self.width)?;
        Some((row, column))
    }
}
