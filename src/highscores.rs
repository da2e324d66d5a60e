/*
highscores.rs

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

//! Manage the results of the solved games.
//!
//! Each solved game produces a [`GameResult`] with the name of the player, the number of steps,
//! and the completion time. Results are handed to a [`ResultStore`], which keeps them and ranks
//! them: the fewer steps, the better. Results with the same number of steps keep the order in
//! which they were added.
//!
//! [`HighScores`] is the in-memory list of results. See the [`crate::saver::highscores`] module
//! for the store that saves the results on disk.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a [`ResultStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a solved game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Name of the player.
    pub player_name: String,

    /// Number of moves it took to reach the goal.
    pub steps: u32,

    /// Completion timestamp, which is displayed in the leaderboard.
    pub created: DateTime<Local>,
}

impl GameResult {
    /// Create a [`GameResult`] object completed now.
    pub fn new(player_name: &str, steps: u32) -> Self {
        Self {
            player_name: player_name.to_string(),
            steps,
            created: Local::now(),
        }
    }
}

/// Sort the results by number of steps. The sort is stable.
pub fn ranked(mut results: Vec<GameResult>) -> Vec<GameResult> {
    results.sort_by_key(|r| r.steps);
    results
}

/// Return the rank (starting at 1) of the given result in a ranked list.
///
/// When the same result appears several times, the last one is used.
pub fn rank_of(ranked: &[GameResult], result: &GameResult) -> Option<usize> {
    ranked.iter().rposition(|r| r == result).map(|i| i + 1)
}

/// Collaborator that keeps the results of the solved games.
pub trait ResultStore {
    /// Add a result and return all the results, ranked.
    fn append(&mut self, result: GameResult) -> Result<Vec<GameResult>, StoreError>;

    /// Return all the results, in the order they were added.
    fn all(&self) -> Result<Vec<GameResult>, StoreError>;

    /// Return the `limit` best results.
    fn top_n(&self, limit: usize) -> Result<Vec<GameResult>, StoreError> {
        let mut results: Vec<GameResult> = ranked(self.all()?);
        results.truncate(limit);
        Ok(results)
    }
}

/// List of the results, in the order they were added.
///
/// Serialized as a plain JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<GameResult>,
}

impl HighScores {
    /// Create an empty [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result and return its rank, starting at 1 for the best result.
    ///
    /// A result ranks after the results that have the same number of steps.
    pub fn add_score(&mut self, result: GameResult) -> usize {
        let rank: usize = self
            .entries
            .iter()
            .filter(|r| r.steps <= result.steps)
            .count()
            + 1;
        self.entries.push(result);
        rank
    }

    /// Return the results in the order they were added.
    pub fn entries(&self) -> &[GameResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResultStore for HighScores {
    fn append(&mut self, result: GameResult) -> Result<Vec<GameResult>, StoreError> {
        self.add_score(result);
        Ok(ranked(self.entries.clone()))
    }

    fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        Ok(self.entries.clone())
    }
}
