//! Historical match corpus loading.
//!
//! Reads yearly match files plus any extra season files. Only the date,
//! player and surface columns are used. Rows that cannot be rated (bad
//! date, missing names) are dropped and counted. Rows on any other surface
//! (Carpet, blank) are kept without a surface so they still feed overall
//! Elo. A file that cannot be read fails the whole load.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tennis_core::{MatchRecord, Surface};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CorpusConfig;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No match files found in {0}")]
    NoFiles(PathBuf),
}

/// Matches ready for replay, in file order
#[derive(Debug, Clone, Default)]
pub struct LoadedCorpus {
    pub matches: Vec<MatchRecord>,
    /// Rows dropped as unratable
    pub skipped: usize,
    /// Kept rows with no Hard/Clay/Grass surface
    pub unsurfaced: usize,
    pub files: usize,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(default)]
    tourney_date: String,
    #[serde(default)]
    winner_name: String,
    #[serde(default)]
    loser_name: String,
    #[serde(default)]
    surface: String,
}

impl RawMatch {
    fn into_record(self) -> Option<MatchRecord> {
        let date = parse_match_date(&self.tourney_date)?;
        let winner = self.winner_name.trim();
        let loser = self.loser_name.trim();
        if winner.is_empty() || loser.is_empty() {
            return None;
        }
        Some(match self.surface.parse::<Surface>() {
            Ok(surface) => MatchRecord::new(date, winner, loser, surface),
            Err(_) => MatchRecord::unsurfaced(date, winner, loser),
        })
    }
}

/// Parse a tournament date.
///
/// Accepts `YYYYMMDD`, the same with a zero fraction (`20240115.0`, as
/// written by spreadsheet exports) or ISO `YYYY-MM-DD`.
pub fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    let digits = match raw.split_once('.') {
        Some((int, frac)) if frac.chars().all(|c| c == '0') => int,
        Some(_) => return None,
        None => raw,
    };
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits[0..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Yearly history files, sorted by name
fn history_files(config: &CorpusConfig) -> Result<Vec<PathBuf>, CorpusError> {
    let dir = &config.history_dir;
    let entries = fs::read_dir(dir).map_err(|source| CorpusError::Io {
        path: dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Io {
            path: dir.clone(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(&config.file_prefix) && name.ends_with(".csv") {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn read_file(path: &Path, corpus: &mut LoadedCorpus) -> Result<(), CorpusError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|source| CorpusError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut kept = 0usize;
    let mut skipped = 0usize;
    let mut unsurfaced = 0usize;
    for row in reader.deserialize::<RawMatch>() {
        let raw = row.map_err(|source| CorpusError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        match raw.into_record() {
            Some(record) => {
                if record.surface.is_none() {
                    unsurfaced += 1;
                }
                corpus.matches.push(record);
                kept += 1;
            }
            None => skipped += 1,
        }
    }

    debug!(path = %path.display(), kept, skipped, unsurfaced, "loaded match file");
    corpus.skipped += skipped;
    corpus.unsurfaced += unsurfaced;
    corpus.files += 1;
    Ok(())
}

/// Load every configured match file
pub fn load_corpus(config: &CorpusConfig) -> Result<LoadedCorpus, CorpusError> {
    let mut files = history_files(config)?;
    if files.is_empty() {
        return Err(CorpusError::NoFiles(config.history_dir.clone()));
    }
    files.extend(config.extra_files.iter().cloned());

    let mut corpus = LoadedCorpus::default();
    for path in &files {
        read_file(path, &mut corpus)?;
    }

    info!(
        files = corpus.files,
        matches = corpus.matches.len(),
        skipped = corpus.skipped,
        unsurfaced = corpus.unsurfaced,
        "match corpus loaded"
    );
    Ok(corpus)
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod corpus_tests;
