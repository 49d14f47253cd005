//! News item model.

use serde::{Deserialize, Serialize};

/// A single retrievable text unit (article/tweet) that is a candidate for
/// sentiment analysis.
///
/// A collection of news items is scoped to exactly one keyword at a time;
/// selecting a new topic or re-fetching invalidates the prior collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Backend-assigned item identifier, unique within one fetch
    pub id: i64,
    /// Text submitted for analysis
    pub text: String,
    /// Headline, when the backend source provides one
    #[serde(default)]
    pub title: Option<String>,
    /// Name of the originating outlet
    #[serde(default)]
    pub source: Option<String>,
    /// Keyword this item was fetched for
    #[serde(default)]
    pub topic: Option<String>,
}

impl NewsItem {
    /// A short preview of the item text for one-line displays.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() > max_chars {
            let head: String = self.text.chars().take(max_chars).collect();
            format!("{head}...")
        } else {
            self.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> NewsItem {
        NewsItem {
            id: 1,
            text: text.to_string(),
            title: None,
            source: None,
            topic: None,
        }
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "a".repeat(60);
        assert_eq!(item(&long).preview(50), format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(item("short").preview(50), "short");
    }
}
