/*
application.rs

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

//! Play the game in a terminal.
//!
//! [`Application`] reads the player's commands line by line and writes the board after each
//! command. It works on any [`BufRead`] and [`Write`] pair so that it can be driven by the
//! standard input and output, or by a script.
//!
//! The results of the solved games are handed to the [`ResultStore`] given to
//! [`Application::new`].

use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::cli_options::Options;
use crate::config;
use crate::draw;
use crate::game::{Game, MoveOutcome};
use crate::highscores::{GameResult, ResultStore, StoreError, rank_of};
use crate::maze::{BoardError, Coordinate, Direction};

const HELP: &str = "\
Commands:
  w, up       slide the ball up
  d, right    slide the ball right
  s, down     slide the ball down
  a, left     slide the ball left
  r, restart  put the ball back to its starting position
  l, scores   display the leaderboard
  h, help     display this help
  q, quit     quit the game
";

/// Type of errors.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("results store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Player command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Scores,
    Help,
    Quit,
}

/// Parse a command line typed by the player. Case is ignored.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "w" | "up" => Some(Command::Move(Direction::Up)),
        "d" | "right" => Some(Command::Move(Direction::Right)),
        "s" | "down" => Some(Command::Move(Direction::Down)),
        "a" | "left" => Some(Command::Move(Direction::Left)),
        "r" | "restart" => Some(Command::Restart),
        "l" | "scores" => Some(Command::Scores),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Terminal front end.
pub struct Application<S: ResultStore, R: BufRead, W: Write> {
    /// Where the results of the solved games go.
    store: S,

    /// Player input.
    input: R,

    /// Game display.
    output: W,

    /// Number of results displayed in the leaderboard.
    leaderboard_size: usize,
}

impl<S: ResultStore, R: BufRead, W: Write> Application<S, R, W> {
    /// Create an [`Application`] object.
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            leaderboard_size: config::LEADERBOARD_SIZE,
        }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }

    /// Run the action requested by the command-line options.
    pub fn run(&mut self, options: &Options) -> Result<(), ApplicationError> {
        self.leaderboard_size = options.count;
        if options.scores {
            let top: Vec<GameResult> = self.store.top_n(self.leaderboard_size)?;
            write!(self.output, "{}", draw::leaderboard_to_string(&top))?;
            return Ok(());
        }
        match &options.moves {
            Some(moves) => {
                let name: &str = options
                    .name
                    .as_deref()
                    .unwrap_or(config::DEFAULT_PLAYER_NAME);
                self.play_moves(name, options.start, moves)
            }
            None => self.play_interactive(options.name.clone(), options.start),
        }
    }

    /// Play the given moves, display the final board, and record the result if the labyrinth is
    /// solved. Moves after the goal is reached are ignored.
    ///
    /// A result that cannot be saved is returned as an [`ApplicationError::Store`] error.
    pub fn play_moves(
        &mut self,
        player_name: &str,
        start: Coordinate,
        moves: &[Direction],
    ) -> Result<(), ApplicationError> {
        let mut game: Game = Game::new(player_name, start)?;

        for (i, direction) in moves.iter().enumerate() {
            if let MoveOutcome::Solved(_) = game.perform_move(*direction) {
                if i + 1 < moves.len() {
                    debug!("Ignoring the {} moves after the goal", moves.len() - i - 1);
                }
                break;
            }
        }
        self.draw_game(&game)?;
        if game.is_solved() {
            self.finish(&game)?;
        } else {
            writeln!(self.output, "The ball did not reach the goal.")?;
        }
        Ok(())
    }

    /// Play rounds until the player quits or the input ends.
    pub fn play_interactive(
        &mut self,
        player_name: Option<String>,
        start: Coordinate,
    ) -> Result<(), ApplicationError> {
        // Fail early, before asking anything
        Game::new(config::DEFAULT_PLAYER_NAME, start)?;

        writeln!(self.output, "Labyrinth {}", config::VERSION)?;
        let mut name: String = match player_name {
            Some(n) => n,
            None => match self.prompt_player_name()? {
                Some(n) => n,
                None => return Ok(()),
            },
        };

        loop {
            let mut game: Game = Game::new(&name, start)?;
            writeln!(self.output, "Good luck, {}!", game.player_name())?;
            self.draw_game(&game)?;

            if !self.play_round(&mut game)? {
                return Ok(());
            }
            // A new player can take over for the next round
            name = match self.prompt_player_name()? {
                Some(n) => n,
                None => return Ok(()),
            };
        }
    }

    /// Process the player commands until the labyrinth is solved or the player quits.
    ///
    /// Return whether the player wants to play another round.
    fn play_round(&mut self, game: &mut Game) -> Result<bool, ApplicationError> {
        loop {
            let line: String = match self.prompt("> ")? {
                Some(l) => l,
                None => return Ok(false),
            };
            if line.trim().is_empty() {
                continue;
            }
            let command: Command = match parse_command(&line) {
                Some(c) => c,
                None => {
                    writeln!(self.output, "Unknown command. Type `help` for the list.")?;
                    continue;
                }
            };
            debug!("Command: {command:?}");

            match command {
                Command::Move(direction) => match game.perform_move(direction) {
                    MoveOutcome::Blocked => {
                        writeln!(self.output, "The ball cannot move {direction}.")?;
                    }
                    MoveOutcome::Moved(_) => self.draw_game(game)?,
                    MoveOutcome::Solved(_) => {
                        self.draw_game(game)?;
                        match self.finish(game) {
                            Err(ApplicationError::Store(error)) => {
                                warn!("Cannot save the result: {error}");
                                writeln!(self.output, "The result could not be saved: {error}")?;
                            }
                            other => other?,
                        }
                        return self.ask_play_again();
                    }
                },
                Command::Restart => {
                    game.restart();
                    self.draw_game(game)?;
                }
                Command::Scores => match self.store.top_n(self.leaderboard_size) {
                    Ok(top) => write!(self.output, "{}", draw::leaderboard_to_string(&top))?,
                    Err(error) => {
                        warn!("Cannot read the results: {error}");
                        writeln!(self.output, "The leaderboard is not available: {error}")?;
                    }
                },
                Command::Help => write!(self.output, "{HELP}")?,
                Command::Quit => return Ok(false),
            }
        }
    }

    /// Record the result of the solved game and display the leaderboard.
    fn finish(&mut self, game: &Game) -> Result<(), ApplicationError> {
        let result: GameResult = match game.result() {
            Some(r) => r,
            None => return Ok(()),
        };
        writeln!(
            self.output,
            "Congratulations {}, you solved the labyrinth in {} steps!",
            result.player_name, result.steps
        )?;

        let ranked: Vec<GameResult> = self.store.append(result.clone())?;
        info!(
            "Result saved: {} in {} steps",
            result.player_name, result.steps
        );
        if let Some(rank) = rank_of(&ranked, &result) {
            writeln!(self.output, "Your rank: {rank} of {}", ranked.len())?;
        }
        let top: &[GameResult] = &ranked[..ranked.len().min(self.leaderboard_size)];
        write!(self.output, "{}", draw::leaderboard_to_string(top))?;
        Ok(())
    }

    fn ask_play_again(&mut self) -> Result<bool, ApplicationError> {
        let answer: Option<String> = self.prompt("Play again? [y/N] ")?;
        Ok(answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    /// Ask for the player's name. Return None when the input ends.
    fn prompt_player_name(&mut self) -> Result<Option<String>, ApplicationError> {
        let name: Option<String> = self.prompt("Enter your name: ")?;
        if let Some(n) = &name {
            debug!("Player name entered: {}", n.trim());
        }
        Ok(name)
    }

    /// Display a prompt and read a line. Return None when the input ends.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ApplicationError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn draw_game(&mut self, game: &Game) -> Result<(), ApplicationError> {
        write!(self.output, "{}", draw::board_to_string(game.board()))?;
        writeln!(self.output, "Steps: {}", game.steps())?;
        Ok(())
    }
}
