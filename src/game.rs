/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] is one round of one player: the player's name and the [`Board`]. The front end
//! sends the player's moves to [`Game::perform_move`]. Moves that the board refuses (the ball is
//! against a wall, or the labyrinth is solved) are not sent to the board, so they do not count
//! as steps.
//!
//! When the labyrinth is solved, [`Game::result`] provides the [`GameResult`] to hand over to the
//! leaderboard.

use log::debug;

use crate::config;
use crate::highscores::GameResult;
use crate::maze::{Board, BoardError, Coordinate, Direction};

/// Effect of a move request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The ball cannot move in that direction. The step counter did not change.
    Blocked,

    /// The ball moved to the given position.
    Moved(Coordinate),

    /// The ball moved to the goal.
    Solved(Coordinate),
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Name of the player, as stored in the leaderboard.
    player_name: String,

    /// Board being played.
    board: Board,

    /// Board in its initial state, used for restarting the game.
    initial_board: Board,
}

impl Game {
    /// Create a [`Game`] object.
    ///
    /// A blank player name is replaced by [`config::DEFAULT_PLAYER_NAME`].
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidStart`] when the starting position is outside the board.
    pub fn new(player_name: &str, start: Coordinate) -> Result<Self, BoardError> {
        let board: Board = Board::new(start)?;
        let name: &str = match player_name.trim() {
            "" => config::DEFAULT_PLAYER_NAME,
            n => n,
        };
        debug!("New game for {name}");
        Ok(Self {
            player_name: name.to_string(),
            initial_board: board.clone(),
            board,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn steps(&self) -> u32 {
        self.board.step_count()
    }

    /// Whether the ball is on the goal.
    pub fn is_solved(&self) -> bool {
        self.board.is_game_over()
    }

    /// Move the ball in the given direction if the board allows it.
    pub fn perform_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.board.can_move(direction) {
            debug!("Cannot move {direction} from {}", self.board.ball_position());
            return MoveOutcome::Blocked;
        }
        self.board.move_ball(direction);
        let position: Coordinate = self.board.ball_position();
        if self.board.is_game_over() {
            MoveOutcome::Solved(position)
        } else {
            MoveOutcome::Moved(position)
        }
    }

    /// Put the ball back to its starting position and reset the step counter.
    pub fn restart(&mut self) {
        debug!("Restarting the game");
        self.board = self.initial_board.clone();
    }

    /// Return the result to record in the leaderboard, or None if the game is not solved.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_solved() {
            return None;
        }
        Some(GameResult::new(&self.player_name, self.steps()))
    }
}
