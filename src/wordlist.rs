// This file is part of Pwcompose.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

pub const MIN_WORDS: usize = 2;

#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub words: Vec<String>,
    pub failures: Vec<LoadFailure>,
}

/// One word per line: trimmed, NFC-normalized, blank lines dropped.
/// Duplicates and ordering are kept as found.
pub fn parse_wordlist(data: &str) -> impl Iterator<Item = String> + '_ {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.nfc().collect())
}

pub fn read_wordlist<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    Ok(parse_wordlist(&String::from_utf8_lossy(&bytes)).collect())
}

/// Loads every file in order. A file that cannot be read is recorded in
/// `failures` and skipped.
pub fn load_wordlists<I, P>(paths: I) -> LoadReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = LoadReport::default();

    for path in paths {
        let path = path.as_ref();
        match read_wordlist(path) {
            Ok(words) => report.words.extend(words),
            Err(error) => report.failures.push(LoadFailure {
                path: path.to_path_buf(),
                error,
            }),
        }
    }

    report
}
