//! Admin panel views: statistics, tables, paginated activity log.

use super::ViewState;
use super::export::ExportView;
use crate::api::BackendApi;
use sentipulse_client::dto::{ActivityPage, SearchesResponse, StatisticsResponse, UsersResponse};
use std::sync::Arc;
use strum::Display;

/// Fixed activity log page size.
pub const ACTIVITY_PAGE_SIZE: u32 = 100;

/// The admin panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AdminTab {
    Overview,
    Users,
    Searches,
    #[strum(serialize = "Activity Log")]
    Activity,
    Export,
}

/// The admin panel: one independent view per tab.
///
/// Activating a tab always fetches it afresh; switching away and back
/// re-fetches. Every tab owns its own loading flag and error string.
pub struct AdminPanel<A: BackendApi> {
    api: Arc<A>,
    tab: AdminTab,
    statistics: ViewState<StatisticsResponse>,
    users: ViewState<UsersResponse>,
    searches: ViewState<SearchesResponse>,
    activity: ActivityView,
    export: ExportView,
}

impl<A: BackendApi> AdminPanel<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            tab: AdminTab::Overview,
            statistics: ViewState::default(),
            users: ViewState::default(),
            searches: ViewState::default(),
            activity: ActivityView::default(),
            export: ExportView::default(),
        }
    }

    pub fn active_tab(&self) -> AdminTab {
        self.tab
    }

    /// Switches to a tab and fetches its data afresh.
    ///
    /// The activity log always restarts at offset 0.
    pub async fn activate(&mut self, tab: AdminTab) {
        self.tab = tab;
        match tab {
            AdminTab::Overview => {
                self.statistics.start();
                let result = self.api.admin_statistics().await;
                self.statistics.finish(result);
            }
            AdminTab::Users => {
                self.users.start();
                let result = self.api.admin_users().await;
                self.users.finish(result);
            }
            AdminTab::Searches => {
                self.searches.start();
                let result = self.api.admin_searches().await;
                self.searches.finish(result);
            }
            AdminTab::Activity => self.load_activity(0).await,
            AdminTab::Export => {
                let result = self.api.admin_export().await;
                self.export.finish(result);
            }
        }
    }

    /// Loads one activity page; the loaded page replaces the prior one.
    async fn load_activity(&mut self, offset: u64) {
        self.activity.state.start();
        let result = self.api.admin_activity(ACTIVITY_PAGE_SIZE, offset).await;
        self.activity.state.finish(result);
    }

    /// Advances the activity log one page, unless the displayed range
    /// already reaches the server-reported total.
    pub async fn activity_next(&mut self) {
        let Some(offset) = self.activity.next_offset() else {
            return;
        };
        self.load_activity(offset).await;
    }

    /// Steps the activity log one page back, clamped at the first page.
    pub async fn activity_prev(&mut self) {
        let Some(offset) = self.activity.prev_offset() else {
            return;
        };
        self.load_activity(offset).await;
    }

    pub fn statistics(&self) -> &ViewState<StatisticsResponse> {
        &self.statistics
    }

    pub fn users(&self) -> &ViewState<UsersResponse> {
        &self.users
    }

    pub fn searches(&self) -> &ViewState<SearchesResponse> {
        &self.searches
    }

    pub fn activity(&self) -> &ActivityView {
        &self.activity
    }

    pub fn export(&self) -> &ExportView {
        &self.export
    }
}

/// The paginated activity log view.
#[derive(Debug, Clone, Default)]
pub struct ActivityView {
    state: ViewState<ActivityPage>,
}

impl ActivityView {
    pub fn state(&self) -> &ViewState<ActivityPage> {
        &self.state
    }

    pub fn page(&self) -> Option<&ActivityPage> {
        self.state.data()
    }

    /// Whether a further page exists beyond the displayed range.
    pub fn can_next(&self) -> bool {
        self.next_offset().is_some()
    }

    /// Whether the view is past the first page.
    pub fn can_prev(&self) -> bool {
        self.prev_offset().is_some()
    }

    fn next_offset(&self) -> Option<u64> {
        let page = self.state.data()?;
        let shown_through = page.offset + page.activities.len() as i64;
        if shown_through >= page.total {
            return None;
        }
        Some(page.offset as u64 + ACTIVITY_PAGE_SIZE as u64)
    }

    fn prev_offset(&self) -> Option<u64> {
        let page = self.state.data()?;
        if page.offset <= 0 {
            return None;
        }
        Some((page.offset - ACTIVITY_PAGE_SIZE as i64).max(0) as u64)
    }

    /// Range label, e.g. `1–100 of 250`.
    pub fn range_label(&self) -> Option<String> {
        let page = self.state.data()?;
        Some(format!(
            "{}–{} of {}",
            page.offset + 1,
            page.offset + page.activities.len() as i64,
            page.total
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockBackend;
    use sentipulse_core::PulseError;
    use sentipulse_core::model::ActivityRecord;

    fn record(id: i64) -> ActivityRecord {
        ActivityRecord {
            id,
            action: "analyze".into(),
            actor_type: "user".into(),
            user_id: Some(1),
            payload: None,
            ip_address: Some("127.0.0.1".into()),
            user_agent: None,
            created_at: "2025-02-03 10:00:00".into(),
        }
    }

    fn page(offset: i64, len: usize, total: i64) -> ActivityPage {
        ActivityPage {
            activities: (0..len as i64).map(|i| record(offset + i + 1)).collect(),
            total,
            limit: ACTIVITY_PAGE_SIZE as i64,
            offset,
        }
    }

    #[tokio::test]
    async fn test_activity_pagination_walks_offsets_and_stops_at_total() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_activity(Ok(page(0, 100, 250)));
        api.push_admin_activity(Ok(page(100, 100, 250)));
        api.push_admin_activity(Ok(page(200, 50, 250)));

        let mut panel = AdminPanel::new(api.clone());
        panel.activate(AdminTab::Activity).await;
        assert_eq!(panel.activity().range_label().unwrap(), "1–100 of 250");
        assert!(panel.activity().can_next());
        assert!(!panel.activity().can_prev());

        panel.activity_next().await;
        assert_eq!(panel.activity().range_label().unwrap(), "101–200 of 250");

        panel.activity_next().await;
        assert_eq!(panel.activity().page().unwrap().activities.len(), 50);
        assert_eq!(panel.activity().range_label().unwrap(), "201–250 of 250");
        assert!(!panel.activity().can_next());

        // A refused Next issues no request.
        panel.activity_next().await;
        assert_eq!(
            api.activity_requests(),
            vec![(100, 0), (100, 100), (100, 200)]
        );
    }

    #[tokio::test]
    async fn test_activity_prev_clamps_at_zero() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_activity(Ok(page(0, 100, 250)));
        api.push_admin_activity(Ok(page(100, 100, 250)));
        api.push_admin_activity(Ok(page(0, 100, 250)));

        let mut panel = AdminPanel::new(api.clone());
        panel.activate(AdminTab::Activity).await;
        panel.activity_next().await;
        panel.activity_prev().await;
        assert_eq!(panel.activity().range_label().unwrap(), "1–100 of 250");

        // Already at the first page: refused, no request.
        panel.activity_prev().await;
        assert_eq!(
            api.activity_requests(),
            vec![(100, 0), (100, 100), (100, 0)]
        );
    }

    #[tokio::test]
    async fn test_page_replaces_rather_than_appends() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_activity(Ok(page(0, 100, 150)));
        api.push_admin_activity(Ok(page(100, 50, 150)));

        let mut panel = AdminPanel::new(api);
        panel.activate(AdminTab::Activity).await;
        panel.activity_next().await;

        let loaded = panel.activity().page().unwrap();
        assert_eq!(loaded.activities.len(), 50);
        assert_eq!(loaded.activities[0].id, 101);
    }

    #[tokio::test]
    async fn test_tab_switch_refetches_without_caching() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_users(Ok(UsersResponse::default()));
        api.push_admin_statistics(Ok(StatisticsResponse::default()));
        api.push_admin_users(Ok(UsersResponse::default()));

        let mut panel = AdminPanel::new(api.clone());
        panel.activate(AdminTab::Users).await;
        panel.activate(AdminTab::Overview).await;
        panel.activate(AdminTab::Users).await;

        assert_eq!(api.call_count("admin_users"), 2);
        assert_eq!(api.call_count("admin_statistics"), 1);
    }

    #[tokio::test]
    async fn test_tab_errors_are_independent() {
        let api = Arc::new(MockBackend::new());
        api.push_admin_users(Err(PulseError::status(401, "unauthorized")));
        api.push_admin_searches(Ok(SearchesResponse::default()));

        let mut panel = AdminPanel::new(api);
        panel.activate(AdminTab::Users).await;
        panel.activate(AdminTab::Searches).await;

        assert_eq!(panel.users().error(), Some("unauthorized"));
        assert!(panel.searches().error().is_none());
    }

    #[test]
    fn test_tab_display_names() {
        assert_eq!(AdminTab::Activity.to_string(), "Activity Log");
        assert_eq!(AdminTab::Overview.to_string(), "Overview");
    }
}
