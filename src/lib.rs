/*
lib.rs

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

//! Labyrinth: slide the ball through the labyrinth to the goal.
//!
//! The ball slides in the chosen direction until a wall stops it. The player wins when the ball
//! stops on the goal. Each solved game is recorded in a leaderboard ranked by the number of
//! moves.
//!
//! - [`maze`]: the board, its walls, and the ball movement
//! - [`game`]: a round for one player
//! - [`highscores`]: results of the solved games and the leaderboard
//! - [`saver`]: results file on disk
//! - [`draw`]: text rendering of the board and of the leaderboard
//! - [`application`]: terminal front end
//! - [`cli_options`]: command-line options
//! - [`config`]: constants and data directory

pub mod application;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod highscores;
pub mod maze;
pub mod saver;
