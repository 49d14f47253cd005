//! Data export view.

use super::ViewState;
use chrono::NaiveDate;
use sentipulse_client::dto::ExportBundle;
use sentipulse_core::{PulseError, Result};
use std::path::{Path, PathBuf};

/// The one-shot export view.
///
/// Fetches the full bundle once per activation and saves that exact
/// payload pretty-printed, a pure passthrough with no transformation.
#[derive(Debug, Clone, Default)]
pub struct ExportView {
    state: ViewState<ExportBundle>,
}

impl ExportView {
    pub(crate) fn finish(&mut self, result: Result<ExportBundle>) {
        self.state.start();
        self.state.finish(result);
    }

    pub fn state(&self) -> &ViewState<ExportBundle> {
        &self.state
    }

    pub fn bundle(&self) -> Option<&ExportBundle> {
        self.state.data()
    }

    /// Summary line, e.g. `Users: 3 · Searches: 5 · Activities: 12`.
    pub fn summary(&self) -> Option<String> {
        let bundle = self.state.data()?;
        Some(format!(
            "Users: {} · Searches: {} · Activities: {}",
            bundle.users.len(),
            bundle.searches.len(),
            bundle.activity_log.len()
        ))
    }

    /// Default export file name for a given date,
    /// `admin-export-<ISO date>.json`.
    pub fn default_filename(date: NaiveDate) -> String {
        format!("admin-export-{}.json", date.format("%Y-%m-%d"))
    }

    /// Writes the loaded bundle pretty-printed to `path`.
    ///
    /// # Errors
    ///
    /// Fails with a Validation error when nothing is loaded, or an IO
    /// error when the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf> {
        let Some(bundle) = self.state.data() else {
            return Err(PulseError::validation("No export data loaded"));
        };
        let json = serde_json::to_string_pretty(bundle)
            .map_err(|err| PulseError::io(format!("Failed to serialize export: {err}")))?;
        std::fs::write(path, json)?;
        Ok(path.to_path_buf())
    }
}
