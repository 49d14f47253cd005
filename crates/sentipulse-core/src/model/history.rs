//! Search history models.

use super::sentiment::SentimentBreakdown;
use serde::{Deserialize, Serialize};

/// One stored analysis run, as returned by the history and admin search
/// endpoints. Read-only and server-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    /// Owning user; present on the admin table, absent on per-user history
    #[serde(default)]
    pub user_id: Option<i64>,
    pub keyword: String,
    /// Number of texts analyzed in this run
    pub tweet_count: i64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    /// Server-side timestamp, kept as the raw string the backend sent
    pub created_at: String,
}

impl SearchRecord {
    /// The record's percentages as a breakdown, for dominant-label display.
    pub fn sentiment(&self) -> SentimentBreakdown {
        SentimentBreakdown {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
        }
    }
}

/// Aggregate statistics over a user's search history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryStatistics {
    #[serde(default)]
    pub total_searches: i64,
    #[serde(default)]
    pub total_tweets_analyzed: i64,
    #[serde(default)]
    pub average_sentiment: SentimentBreakdown,
}
