//! Daily matchup file: one `Player1,Player2,Surface` row per match.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tennis_core::Surface;
use tracing::warn;

use crate::corpus::CorpusError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub player1: String,
    pub player2: String,
    pub surface: Surface,
}

impl Matchup {
    /// Selection label, e.g. `"Sinner vs Alcaraz (Clay)"`
    pub fn label(&self) -> String {
        format!("{} vs {} ({})", self.player1, self.player2, self.surface)
    }
}

#[derive(Debug, Deserialize)]
struct RawMatchup {
    #[serde(rename = "Player1")]
    player1: String,
    #[serde(rename = "Player2")]
    player2: String,
    #[serde(rename = "Surface")]
    surface: String,
}

/// Load matchups, skipping rows with blank names or an unknown surface
pub fn load_matchups(path: &Path) -> Result<Vec<Matchup>, CorpusError> {
    let csv_error = |source: csv::Error| CorpusError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let mut matchups = Vec::new();
    for (line, row) in reader.deserialize::<RawMatchup>().enumerate() {
        let raw = row.map_err(csv_error)?;
        if raw.player1.is_empty() || raw.player2.is_empty() {
            warn!(row = line + 1, "matchup without both players, skipping");
            continue;
        }
        match raw.surface.parse::<Surface>() {
            Ok(surface) => matchups.push(Matchup {
                player1: raw.player1,
                player2: raw.player2,
                surface,
            }),
            Err(e) => warn!(row = line + 1, "skipping matchup: {}", e),
        }
    }
    Ok(matchups)
}
