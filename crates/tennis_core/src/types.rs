use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];

    pub fn idx(self) -> usize {
        match self {
            Surface::Hard => 0,
            Surface::Clay => 1,
            Surface::Grass => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Surface::Hard),
            "clay" => Ok(Surface::Clay),
            "grass" => Ok(Surface::Grass),
            other => Err(format!("unknown surface: {:?}", other)),
        }
    }
}

/// One completed match, as supplied by a corpus loader.
///
/// `surface` is `None` for courts outside Hard, Clay and Grass (Carpet, or
/// a blank column). Those matches still count toward overall Elo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub winner: String,
    pub loser: String,
    pub surface: Option<Surface>,
}

impl MatchRecord {
    pub fn new(date: NaiveDate, winner: &str, loser: &str, surface: Surface) -> Self {
        Self {
            date,
            winner: winner.to_string(),
            loser: loser.to_string(),
            surface: Some(surface),
        }
    }

    /// A match played on a surface that has no rating of its own
    pub fn unsurfaced(date: NaiveDate, winner: &str, loser: &str) -> Self {
        Self {
            date,
            winner: winner.to_string(),
            loser: loser.to_string(),
            surface: None,
        }
    }
}
