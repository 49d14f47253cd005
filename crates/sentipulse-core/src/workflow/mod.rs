//! The analysis workflow state machine.
//!
//! Topic selection → news retrieval → item selection → analysis, with the
//! step-ordering and invalidation rules that keep the chain consistent.

pub mod state;

#[cfg(test)]
mod state_test;

pub use state::{
    AnalyzeOutcome, AnalyzeRequest, FetchOutcome, MSG_BUSY, MSG_NO_KEYWORD, MSG_NO_NEWS,
    MSG_NO_SELECTION, StepToken, Workflow, WorkflowStep,
};
