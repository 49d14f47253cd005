//! Admin endpoint responses.

use sentipulse_core::model::{ActivityRecord, SearchRecord, UserRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// `/admin/searches` (most recent 500).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchesResponse {
    #[serde(default)]
    pub searches: Vec<SearchRecord>,
}

/// `/admin/statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_searches: i64,
    #[serde(default)]
    pub total_activities: i64,
}

/// One page of `/admin/activity`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    /// Total number of rows on the server, across all pages
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// `/admin/export`: the full data bundle.
///
/// Records stay as raw JSON values so a saved export is a verbatim
/// pretty-printed passthrough of what the server sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportBundle {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub searches: Vec<Value>,
    #[serde(default)]
    pub activity_log: Vec<Value>,
}

/// `/admin/verify`: storage consistency check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerifyReport {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub tables: VerifyTables,
    #[serde(default)]
    pub latest_activity: Option<Value>,
}

/// Row counts per table, as reported by `/admin/verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyTables {
    #[serde(default)]
    pub users: i64,
    #[serde(default)]
    pub searches: i64,
    #[serde(default)]
    pub activity_log: i64,
}
