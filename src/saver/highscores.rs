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

//! Save and restore the results of the solved games.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by using
//! [`serde`]. The file is a JSON array of results, which is also the format of the
//! `results.json` files written by earlier versions of the game.

use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config;
use crate::highscores::{GameResult, HighScores, ResultStore, StoreError, ranked};

/// Object to save and restore the results.
pub struct SaverHighScores {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the results must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(config::RESULTS_FILE);
        debug!("Results file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`HighScores`] object from the results file.
    ///
    /// Return the [`HighScores`] object or None if the results file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, StoreError> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(Some(highscores))
    }

    /// Save the provided [`HighScores`] object.
    ///
    /// The data directory is created if it does not exist.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), StoreError> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }
}

impl ResultStore for SaverHighScores {
    fn append(&mut self, result: GameResult) -> Result<Vec<GameResult>, StoreError> {
        let mut highscores: HighScores = self.get_highscores()?.unwrap_or_default();
        let rank: usize = highscores.add_score(result);
        self.save_highscores(&highscores)?;
        debug!(
            "Result saved at rank {rank} ({} results)",
            highscores.len()
        );
        Ok(ranked(highscores.entries().to_vec()))
    }

    fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        Ok(self
            .get_highscores()?
            .map(|h| h.entries().to_vec())
            .unwrap_or_default())
    }
}
