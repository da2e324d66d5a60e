/*
maze.rs

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

//! Labyrinth model: the board, its cells and walls, and the ball movement.
//!
//! [`board::Board`] is the only object with behavior. It owns a grid of [`cell::Cell`] objects
//! indexed by [`coordinate::Coordinate`], the position of the ball, the goal, and the step
//! counter.
//!
//! The walls come from [`layout`], which describes the single supported labyrinth. When the
//! board is built, the walls are added on both sides: a wall on the right side of a cell is also
//! a wall on the left side of the cell on its right.
//!
//! The ball moves with [`board::Board::move_ball`]. It slides in the given
//! [`direction::Direction`] until it reaches a wall or the goal.

pub mod board;
pub mod cell;
pub mod coordinate;
pub mod direction;
pub mod layout;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use coordinate::{Coordinate, CoordinateParseError};
pub use direction::{Direction, DirectionError};
