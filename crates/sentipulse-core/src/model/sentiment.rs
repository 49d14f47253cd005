//! Sentiment score types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-computed sentiment percentages for one analyzed text.
///
/// The three values are already percentages summing to roughly 100; they
/// are rendered unmodified, never recomputed or renormalized client-side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentBreakdown {
    /// Derives the dominant label by comparing the three values.
    ///
    /// Ties break in a fixed preference order: positive, then negative,
    /// then neutral.
    pub fn dominant(&self) -> Classification {
        if self.positive >= self.neutral && self.positive >= self.negative {
            Classification::Positive
        } else if self.negative >= self.neutral && self.negative >= self.positive {
            Classification::Negative
        } else {
            Classification::Neutral
        }
    }
}

/// Overall classification assigned to an analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Positive,
    Neutral,
    Negative,
}

impl Classification {
    /// Capitalized label for display, e.g. "Positive".
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Positive => "Positive",
            Classification::Neutral => "Neutral",
            Classification::Negative => "Negative",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
