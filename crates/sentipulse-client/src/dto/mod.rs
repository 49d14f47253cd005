//! Response types, one per backend endpoint.
//!
//! Success bodies decode into these shapes and fail fast on a mismatch;
//! optional wire fields default instead of failing.

pub mod admin;
pub mod auth;
pub mod history;
pub mod news;

pub use admin::{
    ActivityPage, ExportBundle, SearchesResponse, StatisticsResponse, UsersResponse, VerifyReport,
    VerifyTables,
};
pub use auth::{Acknowledged, AdminMeResponse, AuthResponse, MeResponse};
pub use history::HistoryOverview;
pub use news::{FetchNewsResponse, TrendingResponse};
