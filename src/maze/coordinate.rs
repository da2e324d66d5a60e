/*
coordinate.rs

Copyright 2025 Hervé Quatremain

This file is part of Labyrinth.

Labyrinth is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Labyrinth is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Labyrinth. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Row and column coordinates on the board.
//!
//! A [`Coordinate`] is a plain value. It does not know the board size: checking that a
//! coordinate is inside the grid is the job of [`crate::maze::board::Board`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use super::direction::Direction;

/// Error returned when parsing a coordinate from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    /// The text is not in the `row,col` format.
    #[error("expected `row,col`, got `{0}`")]
    Format(String),

    /// One of the two components is not an integer.
    #[error("invalid coordinate component: {0}")]
    Component(#[from] ParseIntError),
}

/// Position on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    /// Create a [`Coordinate`] object. Negative or out of range values are accepted.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> i32 {
        self.row
    }

    pub fn col(self) -> i32 {
        self.col
    }

    /// Return the adjacent coordinate in the given direction.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Parse `"row,col"`, optionally between parentheses as displayed by [`fmt::Display`]. Spaces
/// around the components are ignored.
impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let inner: &str = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| CoordinateParseError::Format(s.to_string()))?;
        Ok(Self::new(row.trim().parse()?, col.trim().parse()?))
    }
}
