//! Trending topic model.

use serde::{Deserialize, Serialize};

/// A trending subject a user can pick as the seed for news retrieval.
///
/// Topics are immutable and supplied by the backend; selecting one is the
/// entry point of the analysis workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Backend-assigned topic identifier
    pub id: i64,
    /// Display title, also used as the search keyword
    pub title: String,
    /// Topic category, e.g. "Technology"
    pub category: String,
}
