/*
main.rs

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

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use labyrinth::application::Application;
use labyrinth::cli_options::{self, Options};
use labyrinth::config;
use labyrinth::saver::highscores::SaverHighScores;

fn main() -> ExitCode {
    let options: Options = cli_options::parse();

    let data_dir: PathBuf = options
        .data_dir
        .clone()
        .unwrap_or_else(config::user_data_dir);
    let store: SaverHighScores = SaverHighScores::new(data_dir);

    let mut app = Application::new(store, io::stdin().lock(), io::stdout());
    match app.run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", config::PKGNAME);
            ExitCode::FAILURE
        }
    }
}
