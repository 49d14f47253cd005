//! Workflow state and transitions.

use crate::error::{PulseError, Result};
use crate::model::{AnalysisResult, NewsItem, Topic};

/// Guard message when news is fetched without a keyword.
pub const MSG_NO_KEYWORD: &str = "Please select a topic first";
/// Guard message when analysis is started without a selected item.
pub const MSG_NO_SELECTION: &str = "Please select a news item to analyze";
/// Guard message when a step is triggered while another call is in flight.
pub const MSG_BUSY: &str = "Another request is still in progress";
/// Message when a fetch succeeds but returns no items.
pub const MSG_NO_NEWS: &str = "No news found for this topic";

/// Token identifying one in-flight call of a workflow step.
///
/// Completions carry their token back; a completion whose token is no
/// longer current is discarded, so a response from a superseded chain can
/// never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepToken(u64);

/// Per-step in-flight guard with a monotonically increasing epoch.
#[derive(Debug, Clone, Default)]
struct StepGuard {
    in_flight: bool,
    epoch: u64,
}

impl StepGuard {
    fn begin(&mut self) -> StepToken {
        self.epoch += 1;
        self.in_flight = true;
        StepToken(self.epoch)
    }

    /// Invalidates any in-flight call without waiting for its completion.
    fn invalidate(&mut self) {
        self.epoch += 1;
        self.in_flight = false;
    }

    fn is_current(&self, token: StepToken) -> bool {
        token.0 == self.epoch
    }
}

/// Outcome of a news fetch, fed back into the state machine.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The backend returned at least one item
    Items(Vec<NewsItem>),
    /// The call succeeded but found nothing; the backend may supply its
    /// own message
    Empty { message: Option<String> },
    /// The call failed; the message is surfaced to the user
    Failed(String),
}

/// Outcome of an analysis call, fed back into the state machine.
#[derive(Debug, Clone)]
pub enum AnalyzeOutcome {
    Done(AnalysisResult),
    Failed(String),
}

/// What an analysis call must submit to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub news_text: String,
    pub topic: String,
}

/// The step the workflow is currently in, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Idle,
    TopicSelected,
    FetchingNews,
    NewsListed,
    NewsSelected,
    Analyzing,
    Analyzed,
}

/// The analysis workflow state machine.
///
/// Holds the chain of derived state: keyword/topic → news items → selected
/// item → analysis result. The chain is strictly ordered; invalidating any
/// link clears everything downstream of it. Transitions that start a
/// network call come in `begin_*`/`complete_*` pairs: `begin_*` validates
/// the guard conditions and hands out a [`StepToken`], and `complete_*`
/// applies the outcome only while that token is still current.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    keyword: String,
    topic: Option<Topic>,
    news: Vec<NewsItem>,
    selected: Option<NewsItem>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    fetch: StepGuard,
    analyze: StepGuard,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a topic and starts a fresh chain.
    ///
    /// This is never a no-op: re-selecting the already selected topic also
    /// clears the news collection, the selection, and any prior result.
    pub fn select_topic(&mut self, topic: Topic) {
        self.keyword = topic.title.clone();
        self.topic = Some(topic);
        self.reset_chain();
    }

    /// Sets a manually entered keyword, starting a fresh chain without a
    /// topic.
    pub fn enter_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_string();
        self.topic = None;
        self.reset_chain();
    }

    /// Clears everything downstream of the keyword and invalidates any
    /// in-flight call from the superseded chain.
    fn reset_chain(&mut self) {
        self.news.clear();
        self.selected = None;
        self.result = None;
        self.error = None;
        self.fetch.invalidate();
        self.analyze.invalidate();
    }

    /// Starts a news fetch for the current keyword.
    ///
    /// Refused with a [`PulseError::Validation`] when the keyword is blank
    /// or another call is in flight; the refusal is stored as the step's
    /// error message and no network call happens.
    pub fn begin_fetch_news(&mut self) -> Result<StepToken> {
        if self.keyword.trim().is_empty() {
            return Err(self.fail_validation(MSG_NO_KEYWORD));
        }
        if self.fetch.in_flight || self.analyze.in_flight {
            return Err(self.fail_validation(MSG_BUSY));
        }
        self.error = None;
        self.news.clear();
        self.selected = None;
        self.result = None;
        Ok(self.fetch.begin())
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `false` when the token is stale (the chain was superseded
    /// while the call was in flight) and the outcome was discarded.
    pub fn complete_fetch_news(&mut self, token: StepToken, outcome: FetchOutcome) -> bool {
        if !self.fetch.is_current(token) {
            return false;
        }
        self.fetch.in_flight = false;
        match outcome {
            FetchOutcome::Items(items) if !items.is_empty() => {
                self.news = items;
                self.error = None;
            }
            FetchOutcome::Items(_) | FetchOutcome::Empty { message: None } => {
                self.error = Some(MSG_NO_NEWS.to_string());
            }
            FetchOutcome::Empty {
                message: Some(message),
            } => self.error = Some(message),
            FetchOutcome::Failed(message) => self.error = Some(message),
        }
        true
    }

    /// Selects one of the fetched news items, clearing any prior result.
    ///
    /// Selecting a different item also invalidates an in-flight analysis:
    /// its result belongs to the superseded selection.
    pub fn select_news(&mut self, id: i64) -> Result<()> {
        let Some(item) = self.news.iter().find(|item| item.id == id).cloned() else {
            return Err(self.fail_validation(format!("No news item with id {id}")));
        };
        self.selected = Some(item);
        self.result = None;
        self.analyze.invalidate();
        Ok(())
    }

    /// Starts analysis of the selected news item.
    ///
    /// Refused with a [`PulseError::Validation`] when nothing is selected
    /// or another call is in flight; the refusal is stored as the step's
    /// error message and no network call happens. A previous result stays
    /// visible until a new attempt overwrites it.
    pub fn begin_analyze(&mut self) -> Result<(StepToken, AnalyzeRequest)> {
        let Some(selected) = self.selected.clone() else {
            return Err(self.fail_validation(MSG_NO_SELECTION));
        };
        if self.fetch.in_flight || self.analyze.in_flight {
            return Err(self.fail_validation(MSG_BUSY));
        }
        let request = AnalyzeRequest {
            news_text: selected.text,
            topic: self.keyword.clone(),
        };
        self.error = None;
        Ok((self.analyze.begin(), request))
    }

    /// Applies an analysis outcome.
    ///
    /// Returns `false` when the token is stale and the outcome was
    /// discarded.
    pub fn complete_analyze(&mut self, token: StepToken, outcome: AnalyzeOutcome) -> bool {
        if !self.analyze.is_current(token) {
            return false;
        }
        self.analyze.in_flight = false;
        match outcome {
            AnalyzeOutcome::Done(result) => {
                self.result = Some(result);
                self.error = None;
            }
            AnalyzeOutcome::Failed(message) => self.error = Some(message),
        }
        true
    }

    /// Stores a validation message the way a failed step would.
    fn fail_validation(&mut self, message: impl Into<String>) -> PulseError {
        let err = PulseError::validation(message);
        self.error = Some(err.to_string());
        err
    }

    /// The step the workflow is currently in.
    pub fn step(&self) -> WorkflowStep {
        if self.analyze.in_flight {
            WorkflowStep::Analyzing
        } else if self.result.is_some() {
            WorkflowStep::Analyzed
        } else if self.selected.is_some() {
            WorkflowStep::NewsSelected
        } else if self.fetch.in_flight {
            WorkflowStep::FetchingNews
        } else if !self.news.is_empty() {
            WorkflowStep::NewsListed
        } else if !self.keyword.trim().is_empty() {
            WorkflowStep::TopicSelected
        } else {
            WorkflowStep::Idle
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn selected_news(&self) -> Option<&NewsItem> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// The message of the last failed or refused step, until the next
    /// attempt clears it.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.in_flight
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyze.in_flight
    }
}
