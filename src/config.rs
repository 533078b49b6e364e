//! Training configuration.

use crate::error::{BpeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to choose between pairs that share the highest count.
///
/// Every policy is a total order over distinct pairs, so the winner never
/// depends on hash map iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lexicographically smallest `(first, second)`.
    #[default]
    SmallestPair,
    /// Lexicographically largest `(first, second)`.
    LargestPair,
    /// The pair whose first occurrence in the working sequence is leftmost.
    FirstOccurrence,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "smallest-pair" => Ok(Self::SmallestPair),
            "largest-pair" => Ok(Self::LargestPair),
            "first-occurrence" => Ok(Self::FirstOccurrence),
            _ => Err(format!(
                "invalid tie-break: {s:?} (expected \"smallest-pair\", \"largest-pair\" or \"first-occurrence\")"
            )),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SmallestPair => "smallest-pair",
            Self::LargestPair => "largest-pair",
            Self::FirstOccurrence => "first-occurrence",
        };
        f.write_str(name)
    }
}

/// Parameters for a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Upper bound on rules learned per `train` call.
    pub max_merges: usize,
    /// Winner selection among equally frequent pairs.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Training stops once the best pair occurs fewer times than this.
    #[serde(default = "default_min_frequency")]
    pub min_frequency: usize,
}

fn default_min_frequency() -> usize {
    1
}

impl TrainerConfig {
    /// Creates a config learning at most `max_merges` rules.
    ///
    /// Negative counts are rejected before any work is done.
    pub fn new(max_merges: i64) -> Result<Self> {
        let max_merges =
            usize::try_from(max_merges).map_err(|_| BpeError::InvalidMergeCount(max_merges))?;
        Ok(Self {
            max_merges,
            ..Self::default()
        })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }
}

/// Ten merges with the smallest-pair tie-break.
impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_merges: 10,
            tie_break: TieBreak::default(),
            min_frequency: default_min_frequency(),
        }
    }
}
