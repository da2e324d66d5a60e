/*
board.rs

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

//! The labyrinth board: cells and walls, the ball, and the goal.
//!
//! A [`Board`] is built once per round from the fixed [`layout`]. The player moves the ball with
//! [`Board::move_ball`]: the ball slides in the requested direction until a wall stops it, or
//! until it reaches the goal. Each call counts as one step.
//!
//! Once the ball is on the goal the board is solved: [`Board::can_move`] returns `false` for all
//! directions and the ball does not move anymore.

use log::debug;
use thiserror::Error;

use super::cell::Cell;
use super::coordinate::Coordinate;
use super::direction::Direction;
use super::layout;

/// Type of errors.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The starting position of the ball is outside the board.
    #[error("starting position {0} is outside the board")]
    InvalidStart(Coordinate),

    /// A cell was requested outside the board.
    #[error("position {0} is outside the bounds of the board")]
    OutOfBounds(Coordinate),
}

/// Labyrinth board.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells, indexed by row and then by column.
    cells: Vec<Vec<Cell>>,

    /// Current position of the ball. Always inside the board.
    ball: Coordinate,

    /// Position of the goal.
    goal: Coordinate,

    /// Number of calls to [`Board::move_ball`].
    steps: u32,
}

impl Board {
    /// Create a [`Board`] object with the ball at the given position.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidStart`] when the position is outside the board.
    pub fn new(ball: Coordinate) -> Result<Self, BoardError> {
        let size: usize = layout::BOARD_SIZE as usize;
        let mut board = Self {
            cells: vec![vec![Cell::new(); size]; size],
            ball,
            goal: layout::GOAL,
            steps: 0,
        };

        board.add_outside_borders();
        for (position, direction) in layout::WALLS {
            board.add_wall(position, direction);
        }

        if !board.contains(ball) {
            return Err(BoardError::InvalidStart(ball));
        }
        debug!("Board created, ball at {ball}, goal at {}", board.goal);
        Ok(board)
    }

    fn add_outside_borders(&mut self) {
        let last: usize = self.cells.len() - 1;
        for i in 0..=last {
            self.cells[0][i].set_wall(Direction::Up);
            self.cells[last][i].set_wall(Direction::Down);
            self.cells[i][0].set_wall(Direction::Left);
            self.cells[i][last].set_wall(Direction::Right);
        }
    }

    /// Add a wall to a cell, and the matching wall to the adjacent cell if any.
    fn add_wall(&mut self, position: Coordinate, direction: Direction) {
        if let Some(cell) = self.cell_mut(position) {
            cell.set_wall(direction);
        }
        if let Some(neighbor) = self.cell_mut(position.neighbor(direction)) {
            neighbor.set_wall(direction.opposite());
        }
    }

    fn cell_mut(&mut self, position: Coordinate) -> Option<&mut Cell> {
        if !self.contains(position) {
            return None;
        }
        Some(&mut self.cells[position.row() as usize][position.col() as usize])
    }

    /// Whether the position is inside the board.
    pub fn contains(&self, position: Coordinate) -> bool {
        let size: i32 = self.size();
        (0..size).contains(&position.row()) && (0..size).contains(&position.col())
    }

    /// Number of rows (and columns) of the board.
    pub fn size(&self) -> i32 {
        layout::BOARD_SIZE
    }

    /// Return the cell at the given position.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] when the position is outside the board.
    pub fn cell_at(&self, position: Coordinate) -> Result<&Cell, BoardError> {
        if !self.contains(position) {
            return Err(BoardError::OutOfBounds(position));
        }
        Ok(&self.cells[position.row() as usize][position.col() as usize])
    }

    /// Iterate over the rows of cells, from the top row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn ball_position(&self) -> Coordinate {
        self.ball
    }

    pub fn goal_position(&self) -> Coordinate {
        self.goal
    }

    /// Number of moves requested so far, including the moves that did not displace the ball.
    pub fn step_count(&self) -> u32 {
        self.steps
    }

    /// Whether the ball is on the goal.
    pub fn is_game_over(&self) -> bool {
        self.ball == self.goal
    }

    /// Whether the ball can leave its current cell in the given direction.
    ///
    /// Always `false` once the ball is on the goal.
    pub fn can_move(&self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        // The ball never leaves the board, so its cell always exists
        !self.cells[self.ball.row() as usize][self.ball.col() as usize].has_wall(direction)
    }

    /// Slide the ball in the given direction until it hits a wall or reaches the goal.
    ///
    /// The step counter is incremented even if the ball cannot move.
    pub fn move_ball(&mut self, direction: Direction) {
        let from: Coordinate = self.ball;
        while self.can_move(direction) {
            let next: Coordinate = self.ball.neighbor(direction);
            if !self.contains(next) {
                break;
            }
            self.ball = next;
        }
        self.steps = self.steps.saturating_add(1);
        debug!(
            "Move {direction}: {from} -> {}, steps = {}",
            self.ball, self.steps
        );
        if self.is_game_over() && from != self.ball {
            debug!("The ball reached the goal in {} steps", self.steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction::Direction::{Down, Left, Right, Up};

    fn board(row: i32, col: i32) -> Board {
        Board::new(Coordinate::new(row, col)).expect("valid start")
    }

    fn play(board: &mut Board, moves: &[Direction]) {
        for d in moves {
            board.move_ball(*d);
        }
    }

    #[test]
    fn new_board() {
        let b = board(1, 4);
        assert_eq!(b.size(), 7);
        assert_eq!(b.ball_position(), Coordinate::new(1, 4));
        assert_eq!(b.goal_position(), Coordinate::new(5, 2));
        assert_eq!(b.step_count(), 0);
        assert!(!b.is_game_over());
    }

    #[test]
    fn invalid_start() {
        for (row, col) in [(7, 7), (-1, 0), (0, 7), (3, -2)] {
            let start = Coordinate::new(row, col);
            assert_eq!(Board::new(start).err(), Some(BoardError::InvalidStart(start)));
        }
    }

    #[test]
    fn start_on_corners() {
        for (row, col) in [(0, 0), (0, 6), (6, 0), (6, 6)] {
            assert!(Board::new(Coordinate::new(row, col)).is_ok());
        }
    }

    #[test]
    fn layout_walls_are_set() {
        let b = board(1, 4);
        for (position, direction) in layout::WALLS {
            assert!(
                b.cell_at(position).unwrap().has_wall(direction),
                "missing wall {direction} at {position}"
            );
        }
    }

    #[test]
    fn border_walls() {
        let b = board(3, 3);
        for i in 0..b.size() {
            assert!(b.cell_at(Coordinate::new(0, i)).unwrap().has_wall(Up));
            assert!(b.cell_at(Coordinate::new(6, i)).unwrap().has_wall(Down));
            assert!(b.cell_at(Coordinate::new(i, 0)).unwrap().has_wall(Left));
            assert!(b.cell_at(Coordinate::new(i, 6)).unwrap().has_wall(Right));
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let b = board(3, 3);
        for row in 0..b.size() {
            for col in 0..b.size() {
                let position = Coordinate::new(row, col);
                let cell = b.cell_at(position).unwrap();
                for d in cell.walls() {
                    if let Ok(neighbor) = b.cell_at(position.neighbor(d)) {
                        assert!(
                            neighbor.has_wall(d.opposite()),
                            "wall {d} at {position} has no counterpart"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn interior_cell_without_walls() {
        let b = board(3, 3);
        assert_eq!(b.cell_at(Coordinate::new(1, 4)).unwrap().walls().count(), 0);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let b = board(1, 4);
        for (row, col) in [(7, 7), (8, -9), (-1, 3)] {
            let position = Coordinate::new(row, col);
            assert_eq!(b.cell_at(position), Err(BoardError::OutOfBounds(position)));
        }
    }

    #[test]
    fn can_move_from_start() {
        let b = board(1, 4);
        for d in Direction::ALL {
            assert!(b.can_move(d));
        }
        let b = board(3, 3);
        assert!(b.can_move(Left));
        assert!(b.can_move(Up));
        assert!(!b.can_move(Right));
        assert!(!b.can_move(Down));
    }

    #[test]
    fn slide_to_the_border() {
        let mut b = board(1, 4);
        b.move_ball(Right);
        assert_eq!(b.ball_position(), Coordinate::new(1, 6));
        assert!(!b.can_move(Right));
        assert!(!b.can_move(Up));
    }

    #[test]
    fn slides_stop_at_walls() {
        let mut b = board(1, 4);
        let expected = [
            (Right, (1, 6)),
            (Up, (1, 6)),
            (Right, (1, 6)),
            (Down, (3, 6)),
            (Right, (3, 6)),
            (Left, (3, 5)),
        ];
        for (d, (row, col)) in expected {
            b.move_ball(d);
            assert_eq!(b.ball_position(), Coordinate::new(row, col), "after {d}");
        }
        assert_eq!(b.step_count(), 6);
    }

    #[test]
    fn blocked_move_still_counts() {
        let mut b = board(2, 0);
        let steps: Vec<u32> = [Right, Left, Up, Down]
            .into_iter()
            .map(|d| {
                b.move_ball(d);
                b.step_count()
            })
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);

        let mut b = board(3, 3);
        b.move_ball(Right);
        assert_eq!(b.ball_position(), Coordinate::new(3, 3));
        assert_eq!(b.step_count(), 1);
    }

    #[test]
    fn step_counter_saturates() {
        let mut b = board(5, 2);
        b.steps = u32::MAX - 1;
        b.move_ball(Up);
        assert_eq!(b.step_count(), u32::MAX);
        b.move_ball(Up);
        assert_eq!(b.step_count(), u32::MAX);
        assert_eq!(b.ball_position(), Coordinate::new(5, 2));
    }

    #[test]
    fn short_solution() {
        let mut b = board(3, 3);
        play(&mut b, &[Up, Left, Down, Right]);
        assert_eq!(b.ball_position(), Coordinate::new(2, 2));
        assert!(!b.is_game_over());
        b.move_ball(Down);
        assert!(b.is_game_over());
        assert_eq!(b.ball_position(), b.goal_position());
        assert_eq!(b.step_count(), 5);
    }

    #[test]
    fn long_solution() {
        let mut b = board(1, 4);
        let moves = [
            Right, Down, Left, Down, Left, Up, Left, Down, Left, Up, Right, Up, Right, Up, Left,
            Down, Right,
        ];
        play(&mut b, &moves);
        assert!(!b.is_game_over());
        b.move_ball(Down);
        assert!(b.is_game_over());
        assert_eq!(b.step_count(), 18);
    }

    #[test]
    fn solved_board_is_terminal() {
        let mut b = board(3, 3);
        play(&mut b, &[Up, Left, Down, Right, Down]);
        for d in Direction::ALL {
            assert!(!b.can_move(d));
        }
        play(&mut b, &[Up, Left, Down, Right]);
        assert_eq!(b.ball_position(), Coordinate::new(5, 2));
        assert_eq!(b.goal_position(), Coordinate::new(5, 2));
        assert_eq!(b.step_count(), 9);
    }

    #[test]
    fn ball_stops_on_the_goal() {
        // The goal is open upwards: a ball sliding down column 2 from (2,2) stops on it
        let mut b = board(2, 2);
        b.move_ball(Down);
        assert_eq!(b.ball_position(), Coordinate::new(5, 2));
        assert!(b.is_game_over());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            BoardError::InvalidStart(Coordinate::new(7, 7)).to_string(),
            "starting position (7,7) is outside the board"
        );
        assert_eq!(
            BoardError::OutOfBounds(Coordinate::new(8, -9)).to_string(),
            "position (8,-9) is outside the bounds of the board"
        );
    }
}
