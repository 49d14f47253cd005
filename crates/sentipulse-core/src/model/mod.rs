//! Domain models for the Sentipulse client.
//!
//! All entities are transient: they are held in client memory for the life
//! of the process and owned by the backend otherwise.

pub mod activity;
pub mod analysis;
pub mod history;
pub mod identity;
pub mod news;
pub mod sentiment;
pub mod topic;

pub use activity::ActivityRecord;
pub use analysis::{AnalysisResult, KeyWords};
pub use history::{HistoryStatistics, SearchRecord};
pub use identity::{AdminIdentity, UserIdentity, UserRecord};
pub use news::NewsItem;
pub use sentiment::{Classification, SentimentBreakdown};
pub use topic::Topic;
