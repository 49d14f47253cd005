//! Dashboard service: drives the workflow state machine through the
//! backend.

use crate::api::BackendApi;
use sentipulse_core::model::Topic;
use sentipulse_core::{PulseError, Result};
use sentipulse_core::workflow::{AnalyzeOutcome, FetchOutcome, Workflow};
use std::sync::Arc;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// The user dashboard: trending topics plus the analysis workflow.
///
/// Owns the single workflow instance; there are never concurrent workflow
/// chains. Each asynchronous step stores its own error in the workflow and
/// never lets it escape.
pub struct Dashboard<A: BackendApi> {
    api: Arc<A>,
    workflow: Workflow,
    topics: Vec<Topic>,
    topics_loaded: bool,
}

impl<A: BackendApi> Dashboard<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            workflow: Workflow::new(),
            topics: Vec::new(),
            topics_loaded: false,
        }
    }

    /// Fetches the trending topics list, once, when the dashboard opens.
    ///
    /// Failure degrades to an empty list so the workflow stays reachable
    /// through manual keyword entry; it is logged, never surfaced.
    pub async fn load_trending(&mut self) {
        match self.api.trending().await {
            Ok(response) => self.topics = response.topics,
            Err(err) => tracing::warn!("Failed to load trending topics: {err}"),
        }
        self.topics_loaded = true;
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topics_loaded(&self) -> bool {
        self.topics_loaded
    }

    /// Selects a trending topic by id, starting a fresh workflow chain.
    pub fn select_topic(&mut self, id: i64) -> Result<()> {
        let Some(topic) = self.topics.iter().find(|topic| topic.id == id).cloned() else {
            return Err(PulseError::validation(format!(
                "No trending topic with id {id}"
            )));
        };
        self.workflow.select_topic(topic);
        Ok(())
    }

    /// Enters a manual keyword, starting a fresh workflow chain.
    pub fn enter_keyword(&mut self, keyword: &str) {
        self.workflow.enter_keyword(keyword);
    }

    /// Selects a fetched news item for analysis.
    pub fn select_news(&mut self, id: i64) -> Result<()> {
        self.workflow.select_news(id)
    }

    /// Fetches news for the current keyword.
    ///
    /// Guard refusals and call failures both end up as the workflow's step
    /// error; a refused step makes no network call.
    pub async fn fetch_news(&mut self) {
        let Ok(token) = self.workflow.begin_fetch_news() else {
            return;
        };
        let keyword = self.workflow.keyword().to_string();
        let outcome = match self.api.fetch_news(&keyword).await {
            Ok(response) if response.news_items.is_empty() => FetchOutcome::Empty {
                message: response.message,
            },
            Ok(response) => FetchOutcome::Items(response.news_items),
            Err(err) => FetchOutcome::Failed(err.to_string()),
        };
        self.workflow.complete_fetch_news(token, outcome);
    }

    /// Analyzes the selected news item.
    pub async fn analyze(&mut self) {
        let Ok((token, request)) = self.workflow.begin_analyze() else {
            return;
        };
        let outcome = match self.api.analyze(&request.news_text, &request.topic).await {
            Ok(result) => AnalyzeOutcome::Done(result),
            Err(err) => AnalyzeOutcome::Failed(err.to_string()),
        };
        self.workflow.complete_analyze(token, outcome);
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }
}
