/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Labyrinth asks for the player's name and starts an interactive game in the
//! terminal.
//!
//! # Examples
//!
//! Display the ten best results:
//!
//! ```text
//! $ labyrinth --scores
//! Rank  Player                Steps  Date
//!    1  kate                      5  Mon May 12 10:00:00 2025
//!    2  Anonymous                18  Mon May 12 10:15:30 2025
//! ```
//!
//! Solve the labyrinth from another starting position without interaction:
//!
//! ```text
//! $ labyrinth --name kate --start 3,3 --moves up,left,down,right,down
//! ```

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, LEADERBOARD_SIZE};
use crate::maze::layout::DEFAULT_START;
use crate::maze::{Coordinate, Direction};

/// Slide the ball through the labyrinth to the goal.
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Options {
    /// Name of the player (asked when not provided)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Starting position of the ball, as ROW,COL
    #[arg(short, long, value_name = "ROW,COL", default_value_t = DEFAULT_START, allow_hyphen_values = true)]
    pub start: Coordinate,

    /// Play the given moves without interaction, then exit
    #[arg(value_enum, short, long, value_delimiter = ',', num_args = 1..)]
    pub moves: Option<Vec<Direction>>,

    /// Display the leaderboard and exit
    #[arg(short = 'l', long, default_value_t = false)]
    pub scores: bool,

    /// Number of results to display in the leaderboard
    #[arg(short, long, default_value_t = LEADERBOARD_SIZE)]
    pub count: usize,

    /// Directory where the results are stored
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Options {
    let options: Options = Options::parse();
    init_logger(options.debug);
    options
}

/// Initialize the logger. `RUST_LOG` applies unless debug messages are requested.
fn init_logger(debug: bool) {
    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_command() {
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["labyrinth"]).unwrap();
        assert_eq!(options.name, None);
        assert_eq!(options.start, Coordinate::new(1, 4));
        assert_eq!(options.moves, None);
        assert!(!options.scores);
        assert_eq!(options.count, 10);
        assert_eq!(options.data_dir, None);
        assert!(!options.debug);
    }

    #[test]
    fn moves_and_start() {
        let options = Options::try_parse_from([
            "labyrinth",
            "--start",
            "3,3",
            "--moves",
            "up,left,down,right,down",
            "-n",
            "kate",
        ])
        .unwrap();
        assert_eq!(options.start, Coordinate::new(3, 3));
        assert_eq!(
            options.moves,
            Some(vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right,
                Direction::Down
            ])
        );
        assert_eq!(options.name.as_deref(), Some("kate"));
    }

    #[test]
    fn negative_start_is_parsed() {
        let options = Options::try_parse_from(["labyrinth", "-s", "-1,2"]).unwrap();
        assert_eq!(options.start, Coordinate::new(-1, 2));
    }

    #[test]
    fn invalid_values() {
        assert!(Options::try_parse_from(["labyrinth", "--start", "12"]).is_err());
        assert!(Options::try_parse_from(["labyrinth", "--moves", "north"]).is_err());
    }

    #[test]
    fn scores() {
        let options =
            Options::try_parse_from(["labyrinth", "-l", "-c", "3", "--data-dir", "/tmp/x"])
                .unwrap();
        assert!(options.scores);
        assert_eq!(options.count, 3);
        assert_eq!(options.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
