//! Analysis result model.

use super::sentiment::{Classification, SentimentBreakdown};
use serde::{Deserialize, Serialize};

/// The sentiment scoring and explanation returned for one analyzed news
/// item.
///
/// Invalidated whenever the selected news item or topic changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Percentage breakdown, rendered as-is
    pub sentiment: SentimentBreakdown,
    /// Overall label the model assigned
    pub classification: Classification,
    /// Model confidence in the classification, as a percentage
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Human-readable explanation of the scoring
    #[serde(default)]
    pub explanation: Option<String>,
    /// Signal words the model keyed on
    #[serde(default)]
    pub key_words: Option<KeyWords>,
    /// Truncated preview of the analyzed text
    #[serde(default)]
    pub news_text: Option<String>,
    /// The full analyzed text
    #[serde(default)]
    pub full_text: Option<String>,
    /// Keyword the analysis was run under
    #[serde(default)]
    pub topic: Option<String>,
}

/// Positive/negative signal words detected during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyWords {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

impl KeyWords {
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
