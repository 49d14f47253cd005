//! Read-only query views.
//!
//! Each view is an independent consumer of the backend with its own
//! loading flag and error string; errors from one view never affect
//! another, and nothing is cached across activations.

pub mod admin;
pub mod export;
pub mod history;

pub use admin::{ACTIVITY_PAGE_SIZE, ActivityView, AdminPanel, AdminTab};
pub use export::ExportView;
pub use history::HistoryView;

use sentipulse_core::Result;

/// Per-view fetch state: loading flag, error string, last loaded data.
#[derive(Debug, Clone, Default)]
pub struct ViewState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<T>,
}

impl<T> ViewState<T> {
    /// Marks the view loading and clears the previous error.
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a fetch result and clears the loading flag.
    ///
    /// A failure keeps the previously loaded data visible; only a success
    /// replaces it.
    fn finish(&mut self, result: Result<T>) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
