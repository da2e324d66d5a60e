/*
cell.rs

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

//! Board cells and their walls.

use super::direction::Direction;

/// Walls around a board cell.
///
/// All the walls are open when the cell is created. Walls are only added while the board is
/// built, and are never removed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    up: bool,
    right: bool,
    down: bool,
    left: bool,
}

impl Cell {
    /// Create a [`Cell`] object without any wall.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there is a wall on the given side of the cell.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Add a wall on the given side of the cell. Adding an existing wall does nothing.
    pub fn set_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Right => self.right = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
        }
    }

    /// Return the sides of the cell that have a wall.
    pub fn walls(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.has_wall(*d))
    }
}
