//! Trending and news-fetch endpoint responses.

use sentipulse_core::model::{NewsItem, Topic};
use serde::{Deserialize, Serialize};

/// `/trending`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// `/fetch-news`.
///
/// An empty `news_items` with a `message` is a successful call that found
/// nothing, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchNewsResponse {
    #[serde(default)]
    pub news_items: Vec<NewsItem>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    /// Which upstream supplied the items (NewsAPI, Twitter, Demo)
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
