/*
config.rs

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

//! Application constants and locations.

use std::path::PathBuf;

/// Name of the package, also used for the data directory.
pub const PKGNAME: &str = env!("CARGO_PKG_NAME");

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Name of the file that stores the results, in the data directory.
pub const RESULTS_FILE: &str = "results.json";

/// Name used for the results when the player does not give one.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Number of results displayed in the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Return the directory where the application data is stored.
///
/// The directory is the `labyrinth` subdirectory of the platform data directory
/// (`$XDG_DATA_HOME` or `~/.local/share` on Linux). The current directory is used when the
/// platform directory cannot be determined.
pub fn user_data_dir() -> PathBuf {
    data_dir_from(dirs::data_dir())
}

fn data_dir_from(base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(b) => b.join(PKGNAME),
        None => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_subdirectory() {
        let dir = data_dir_from(Some(PathBuf::from("/home/me/.local/share")));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/labyrinth"));
    }

    #[test]
    fn current_dir_fallback() {
        assert_eq!(data_dir_from(None), PathBuf::from("."));
    }

    #[test]
    fn user_data_dir_ends_with_package() {
        let dir = user_data_dir();
        assert!(dir.ends_with(PKGNAME) || dir == PathBuf::from("."));
    }
}
