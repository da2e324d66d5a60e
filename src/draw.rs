/*
draw.rs

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

//! Draw the board and the leaderboard as text.
//!
//! The board is drawn with `+`, `-`, and `|` characters. Each cell is three characters wide:
//!
//! ```text
//! +---+---+
//! | o     |
//! +   +---+
//! |     X |
//! +---+---+
//! ```
//!
//! - `o` is the ball.
//! - `X` is the goal.
//! - `@` is the ball on the goal.

use std::fmt::Write;

use crate::highscores::GameResult;
use crate::maze::{Board, Cell, Coordinate, Direction};

const WALL_H: &str = "---";
const OPEN_H: &str = "   ";

/// Return the content of a cell: the ball, the goal, or nothing.
fn cell_content(board: &Board, position: Coordinate) -> &'static str {
    let ball: bool = board.ball_position() == position;
    let goal: bool = board.goal_position() == position;
    match (ball, goal) {
        (true, true) => " @ ",
        (true, false) => " o ",
        (false, true) => " X ",
        (false, false) => "   ",
    }
}

/// Horizontal line drawn from the given side (up or down) of a row of cells.
fn horizontal_line(out: &mut String, row: &[Cell], side: Direction) {
    for cell in row {
        out.push('+');
        out.push_str(if cell.has_wall(side) { WALL_H } else { OPEN_H });
    }
    out.push_str("+\n");
}

/// Return the board as a multi-line string.
pub fn board_to_string(board: &Board) -> String {
    let mut out: String = String::new();
    let mut last_row: &[Cell] = &[];

    for (r, row) in board.rows().enumerate() {
        horizontal_line(&mut out, row, Direction::Up);
        for (c, cell) in row.iter().enumerate() {
            out.push(if cell.has_wall(Direction::Left) { '|' } else { ' ' });
            out.push_str(cell_content(board, Coordinate::new(r as i32, c as i32)));
        }
        let right_wall: bool = row.last().is_some_and(|c| c.has_wall(Direction::Right));
        out.push(if right_wall { '|' } else { ' ' });
        out.push('\n');
        last_row = row;
    }
    horizontal_line(&mut out, last_row, Direction::Down);
    out
}

/// Return the leaderboard as a table, one result per line.
///
/// The results must already be ranked.
pub fn leaderboard_to_string(results: &[GameResult]) -> String {
    if results.is_empty() {
        return String::from("No results yet.\n");
    }

    let mut out: String = format!("{:>4}  {:<20}  {:>5}  {}\n", "Rank", "Player", "Steps", "Date");
    for (i, r) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<20}  {:>5}  {}",
            i + 1,
            r.player_name,
            r.steps,
            r.created.format("%c")
        );
    }
    out
}
