/*
layout.rs

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

//! The labyrinth layout.
//!
//! Only one layout is supported. It is described here as plain data: the board size, the goal,
//! the default starting position of the ball, and the interior walls. The walls around the board
//! are not listed; [`crate::maze::board::Board`] adds them.

use super::coordinate::Coordinate;
use super::direction::Direction;

/// Number of rows and columns of the board.
pub const BOARD_SIZE: i32 = 7;

/// Cell the ball must reach.
pub const GOAL: Coordinate = Coordinate::new(5, 2);

/// Starting position of the ball when the player does not choose one.
pub const DEFAULT_START: Coordinate = Coordinate::new(1, 4);

/// Interior walls, as a cell and the side of that cell.
///
/// The adjacent cell gets the matching wall on its opposite side when the board is built, so
/// each wall is listed only once.
pub const WALLS: [(Coordinate, Direction); 18] = [
    (Coordinate::new(0, 0), Direction::Right),
    (Coordinate::new(0, 3), Direction::Right),
    (Coordinate::new(0, 2), Direction::Down),
    (Coordinate::new(0, 6), Direction::Down),
    (Coordinate::new(2, 1), Direction::Down),
    (Coordinate::new(2, 2), Direction::Right),
    (Coordinate::new(2, 6), Direction::Left),
    (Coordinate::new(3, 3), Direction::Down),
    (Coordinate::new(3, 3), Direction::Right),
    (Coordinate::new(3, 4), Direction::Right),
    (Coordinate::new(4, 0), Direction::Down),
    (Coordinate::new(4, 4), Direction::Down),
    (Coordinate::new(4, 6), Direction::Up),
    (Coordinate::new(5, 2), Direction::Left),
    (Coordinate::new(5, 2), Direction::Down),
    (Coordinate::new(5, 2), Direction::Right),
    (Coordinate::new(6, 3), Direction::Right),
    (Coordinate::new(6, 5), Direction::Right),
];
