use super::state::*;
use crate::model::{AnalysisResult, Classification, NewsItem, SentimentBreakdown, Topic};

fn topic(id: i64, title: &str) -> Topic {
    Topic {
        id,
        title: title.to_string(),
        category: "Technology".to_string(),
    }
}

fn news(id: i64, text: &str) -> NewsItem {
    NewsItem {
        id,
        text: text.to_string(),
        title: None,
        source: None,
        topic: None,
    }
}

fn result(positive: f64, neutral: f64, negative: f64) -> AnalysisResult {
    AnalysisResult {
        sentiment: SentimentBreakdown {
            positive,
            neutral,
            negative,
        },
        classification: Classification::Positive,
        confidence: Some(90.0),
        explanation: None,
        key_words: None,
        news_text: None,
        full_text: None,
        topic: None,
    }
}

/// Drives a fresh workflow to the Analyzed step.
fn analyzed_workflow() -> Workflow {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "Electric Vehicles"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(
        token,
        FetchOutcome::Items(vec![news(1, "first"), news(2, "second")]),
    );
    workflow.select_news(1).unwrap();
    let (token, _) = workflow.begin_analyze().unwrap();
    workflow.complete_analyze(token, AnalyzeOutcome::Done(result(40.0, 35.0, 25.0)));
    workflow
}

#[test]
fn test_initial_step_is_idle() {
    let workflow = Workflow::new();
    assert_eq!(workflow.step(), WorkflowStep::Idle);
    assert!(workflow.error().is_none());
}

#[test]
fn test_select_topic_sets_keyword() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(3, "Climate Change"));
    assert_eq!(workflow.keyword(), "Climate Change");
    assert_eq!(workflow.step(), WorkflowStep::TopicSelected);
}

#[test]
fn test_reselecting_topic_clears_everything_downstream() {
    let mut workflow = analyzed_workflow();
    assert_eq!(workflow.step(), WorkflowStep::Analyzed);

    // The same topic again: still a full reset, never a no-op.
    workflow.select_topic(topic(1, "Electric Vehicles"));
    assert_eq!(workflow.step(), WorkflowStep::TopicSelected);
    assert!(workflow.news().is_empty());
    assert!(workflow.selected_news().is_none());
    assert!(workflow.result().is_none());
}

#[test]
fn test_manual_keyword_starts_fresh_chain() {
    let mut workflow = analyzed_workflow();
    workflow.enter_keyword("  oil prices  ");
    assert_eq!(workflow.keyword(), "oil prices");
    assert!(workflow.topic().is_none());
    assert!(workflow.news().is_empty());
    assert!(workflow.result().is_none());
    assert_eq!(workflow.step(), WorkflowStep::TopicSelected);
}

#[test]
fn test_fetch_with_blank_keyword_is_refused() {
    let mut workflow = Workflow::new();
    let err = workflow.begin_fetch_news().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(workflow.error(), Some(MSG_NO_KEYWORD));

    workflow.enter_keyword("   ");
    assert!(workflow.begin_fetch_news().is_err());
}

#[test]
fn test_fetch_success_lists_news() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "AI"));
    let token = workflow.begin_fetch_news().unwrap();
    assert_eq!(workflow.step(), WorkflowStep::FetchingNews);
    assert!(workflow.is_fetching());

    let applied =
        workflow.complete_fetch_news(token, FetchOutcome::Items(vec![news(1, "a"), news(2, "b")]));
    assert!(applied);
    assert!(!workflow.is_fetching());
    assert_eq!(workflow.step(), WorkflowStep::NewsListed);
    assert_eq!(workflow.news().len(), 2);
}

#[test]
fn test_fetch_empty_surfaces_message_and_keeps_chain_short() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "oil prices"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(token, FetchOutcome::Empty { message: None });

    assert_eq!(workflow.error(), Some(MSG_NO_NEWS));
    assert!(workflow.news().is_empty());
    assert_eq!(workflow.step(), WorkflowStep::TopicSelected);
    // Analyze is unreachable: nothing is selectable.
    assert!(workflow.begin_analyze().is_err());
}

#[test]
fn test_fetch_empty_prefers_server_message() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(
        token,
        FetchOutcome::Empty {
            message: Some("No news/tweets found for this topic. Try a different keyword.".into()),
        },
    );
    assert_eq!(
        workflow.error(),
        Some("No news/tweets found for this topic. Try a different keyword.")
    );
}

#[test]
fn test_fetch_failure_returns_to_topic_selected() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(token, FetchOutcome::Failed("Request failed (500)".into()));
    assert_eq!(workflow.error(), Some("Request failed (500)"));
    assert_eq!(workflow.step(), WorkflowStep::TopicSelected);
}

#[test]
fn test_analyze_without_selection_is_refused() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let err = workflow.begin_analyze().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(workflow.error(), Some(MSG_NO_SELECTION));
}

#[test]
fn test_steps_are_mutually_exclusive_in_time() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let fetch_token = workflow.begin_fetch_news().unwrap();

    // A second fetch while one is in flight is refused.
    assert!(workflow.begin_fetch_news().unwrap_err().is_validation());

    workflow.complete_fetch_news(fetch_token, FetchOutcome::Items(vec![news(1, "a")]));
    workflow.select_news(1).unwrap();
    let (_token, _) = workflow.begin_analyze().unwrap();

    // Neither step can start while analysis is in flight.
    assert!(workflow.begin_fetch_news().unwrap_err().is_validation());
    assert!(workflow.begin_analyze().unwrap_err().is_validation());
}

#[test]
fn test_selecting_news_clears_prior_result() {
    let mut workflow = analyzed_workflow();
    workflow.select_news(2).unwrap();
    assert!(workflow.result().is_none());
    assert_eq!(workflow.step(), WorkflowStep::NewsSelected);
    assert_eq!(workflow.selected_news().unwrap().id, 2);
}

#[test]
fn test_analyze_failure_keeps_selection_and_previous_result_rules() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(token, FetchOutcome::Items(vec![news(1, "a")]));
    workflow.select_news(1).unwrap();

    let (token, request) = workflow.begin_analyze().unwrap();
    assert_eq!(request.news_text, "a");
    assert_eq!(request.topic, "x");
    workflow.complete_analyze(token, AnalyzeOutcome::Failed("Analysis failed: boom".into()));

    assert_eq!(workflow.error(), Some("Analysis failed: boom"));
    assert_eq!(workflow.step(), WorkflowStep::NewsSelected);
    assert_eq!(workflow.selected_news().unwrap().id, 1);
}

#[test]
fn test_reanalyzing_another_item_overwrites_result() {
    let mut workflow = analyzed_workflow();
    workflow.select_news(2).unwrap();
    let (token, request) = workflow.begin_analyze().unwrap();
    assert_eq!(request.news_text, "second");
    workflow.complete_analyze(token, AnalyzeOutcome::Done(result(10.0, 20.0, 70.0)));
    assert_eq!(workflow.result().unwrap().sentiment.negative, 70.0);
}

#[test]
fn test_percentages_pass_through_unmodified() {
    let workflow = analyzed_workflow();
    let sentiment = workflow.result().unwrap().sentiment;
    assert_eq!(sentiment.positive, 40.0);
    assert_eq!(sentiment.neutral, 35.0);
    assert_eq!(sentiment.negative, 25.0);
}

#[test]
fn test_stale_fetch_completion_is_discarded() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "first"));
    let stale_token = workflow.begin_fetch_news().unwrap();

    // The user re-selects a topic while the fetch is still in flight.
    workflow.select_topic(topic(2, "second"));
    let applied = workflow.complete_fetch_news(stale_token, FetchOutcome::Items(vec![news(1, "a")]));
    assert!(!applied);
    assert!(workflow.news().is_empty());
    assert_eq!(workflow.keyword(), "second");

    // The fresh chain fetches normally afterwards.
    let token = workflow.begin_fetch_news().unwrap();
    assert!(workflow.complete_fetch_news(token, FetchOutcome::Items(vec![news(3, "c")])));
    assert_eq!(workflow.news().len(), 1);
}

#[test]
fn test_stale_analyze_completion_is_discarded() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(token, FetchOutcome::Items(vec![news(1, "a"), news(2, "b")]));
    workflow.select_news(1).unwrap();
    let (stale_token, _) = workflow.begin_analyze().unwrap();

    // Switching the selection invalidates the in-flight analysis.
    workflow.select_news(2).unwrap();
    let applied = workflow.complete_analyze(stale_token, AnalyzeOutcome::Done(result(1.0, 1.0, 98.0)));
    assert!(!applied);
    assert!(workflow.result().is_none());
    assert_eq!(workflow.step(), WorkflowStep::NewsSelected);
}

#[test]
fn test_select_unknown_news_item_is_refused() {
    let mut workflow = Workflow::new();
    workflow.select_topic(topic(1, "x"));
    let token = workflow.begin_fetch_news().unwrap();
    workflow.complete_fetch_news(token, FetchOutcome::Items(vec![news(1, "a")]));
    assert!(workflow.select_news(99).unwrap_err().is_validation());
}
