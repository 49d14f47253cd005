//! Per-user search history view.

use super::ViewState;
use crate::api::BackendApi;
use sentipulse_client::dto::HistoryOverview;
use std::sync::Arc;

/// The signed-in user's search history plus aggregate statistics.
///
/// Fetches when opened and on explicit refresh; nothing is cached.
pub struct HistoryView<A: BackendApi> {
    api: Arc<A>,
    state: ViewState<HistoryOverview>,
}

impl<A: BackendApi> HistoryView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    /// Fetches the history afresh.
    pub async fn load(&mut self) {
        self.state.start();
        let result = self.api.history().await;
        self.state.finish(result);
    }

    pub fn state(&self) -> &ViewState<HistoryOverview> {
        &self.state
    }

    pub fn overview(&self) -> Option<&HistoryOverview> {
        self.state.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockBackend;
    use sentipulse_core::PulseError;
    use sentipulse_core::model::{HistoryStatistics, SearchRecord, SentimentBreakdown};

    fn overview() -> HistoryOverview {
        HistoryOverview {
            searches: vec![SearchRecord {
                id: 1,
                user_id: None,
                keyword: "oil prices".into(),
                tweet_count: 1,
                positive: 42.0,
                neutral: 33.0,
                negative: 25.0,
                created_at: "2025-02-03 10:00:00".into(),
            }],
            statistics: HistoryStatistics {
                total_searches: 1,
                total_tweets_analyzed: 1,
                average_sentiment: SentimentBreakdown {
                    positive: 42.0,
                    neutral: 33.0,
                    negative: 25.0,
                },
            },
        }
    }

    #[tokio::test]
    async fn test_load_stores_overview() {
        let api = Arc::new(MockBackend::new());
        api.push_history(Ok(overview()));
        let mut view = HistoryView::new(api);
        view.load().await;

        assert!(!view.state().is_loading());
        assert!(view.state().error().is_none());
        assert_eq!(view.overview().unwrap().statistics.total_searches, 1);
    }

    #[tokio::test]
    async fn test_load_failure_stores_message_and_keeps_old_data() {
        let api = Arc::new(MockBackend::new());
        api.push_history(Ok(overview()));
        api.push_history(Err(PulseError::status(500, "db locked")));
        let mut view = HistoryView::new(api);

        view.load().await;
        view.load().await;

        assert_eq!(view.state().error(), Some("db locked"));
        // A manual retry works: the error belongs to the failed attempt.
        assert!(view.overview().is_some());
    }
}
