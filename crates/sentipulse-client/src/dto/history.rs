//! History endpoint response.

use sentipulse_core::model::{HistoryStatistics, SearchRecord};
use serde::{Deserialize, Serialize};

/// `/history`: the signed-in user's searches plus aggregate statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryOverview {
    #[serde(default)]
    pub searches: Vec<SearchRecord>,
    #[serde(default)]
    pub statistics: HistoryStatistics,
}
