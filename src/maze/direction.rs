/*
direction.rs

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

//! Directions in which the ball can slide.

use clap::ValueEnum;
use strum_macros::{Display, FromRepr};
use thiserror::Error;

/// Error returned when a row/column delta does not match any direction.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// The delta is the zero vector or not a unit vector along one axis.
    #[error("no direction matches the delta ({d_row},{d_col})")]
    InvalidDelta { d_row: i32, d_col: i32 },
}

/// The four directions of the board.
///
/// The order of the variants follows the clock: up, right, down, left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Display)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All the directions, in the clockwise order starting from [`Direction::Up`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Return the direction that points the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Return the row and column offsets of a one-cell step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Return the direction whose [`Direction::delta`] is exactly `(d_row, d_col)`.
    ///
    /// # Errors
    ///
    /// [`DirectionError::InvalidDelta`] for the zero vector and for any vector that is not one of
    /// the four unit vectors.
    pub fn from_delta(d_row: i32, d_col: i32) -> Result<Self, DirectionError> {
        match (d_row, d_col) {
            (-1, 0) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Right),
            (1, 0) => Ok(Direction::Down),
            (0, -1) => Ok(Direction::Left),
            _ => Err(DirectionError::InvalidDelta { d_row, d_col }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_delta_maps_unit_vectors() {
        assert_eq!(Direction::from_delta(-1, 0), Ok(Direction::Up));
        assert_eq!(Direction::from_delta(0, 1), Ok(Direction::Right));
        assert_eq!(Direction::from_delta(1, 0), Ok(Direction::Down));
        assert_eq!(Direction::from_delta(0, -1), Ok(Direction::Left));
    }

    #[test]
    fn from_delta_rejects_other_vectors() {
        for (d_row, d_col) in [(0, 0), (1, 1), (-1, -1), (2, 0), (0, -3)] {
            assert_eq!(
                Direction::from_delta(d_row, d_col),
                Err(DirectionError::InvalidDelta { d_row, d_col })
            );
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (d_row, d_col) = d.delta();
            assert_eq!(Direction::from_delta(d_row, d_col), Ok(d));
            assert_eq!(Direction::from_repr(d as u8), Some(d));
        }
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn error_message() {
        let err = DirectionError::InvalidDelta { d_row: 0, d_col: 0 };
        assert_eq!(err.to_string(), "no direction matches the delta (0,0)");
    }
}
