//! Recording mock backend for service and view tests.

use crate::api::BackendApi;
use async_trait::async_trait;
use sentipulse_client::dto::{
    Acknowledged, ActivityPage, AdminMeResponse, AuthResponse, ExportBundle, FetchNewsResponse,
    HistoryOverview, MeResponse, SearchesResponse, StatisticsResponse, TrendingResponse,
    UsersResponse, VerifyReport,
};
use sentipulse_core::model::AnalysisResult;
use sentipulse_core::{PulseError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock backend: queued responses per endpoint plus a call log.
///
/// Each call pops the next queued response for its endpoint; an empty
/// queue yields a status error so a test that forgot to queue fails
/// loudly instead of hanging on a default.
#[derive(Default)]
pub struct MockBackend {
    calls: Mutex<Vec<String>>,
    activity_requests: Mutex<Vec<(u32, u64)>>,
    me: Mutex<VecDeque<Result<MeResponse>>>,
    signup: Mutex<VecDeque<Result<AuthResponse>>>,
    login: Mutex<VecDeque<Result<AuthResponse>>>,
    logout: Mutex<VecDeque<Result<Acknowledged>>>,
    trending: Mutex<VecDeque<Result<TrendingResponse>>>,
    fetch_news: Mutex<VecDeque<Result<FetchNewsResponse>>>,
    analyze: Mutex<VecDeque<Result<AnalysisResult>>>,
    history: Mutex<VecDeque<Result<HistoryOverview>>>,
    admin_login: Mutex<VecDeque<Result<Acknowledged>>>,
    admin_logout: Mutex<VecDeque<Result<Acknowledged>>>,
    admin_me: Mutex<VecDeque<Result<AdminMeResponse>>>,
    admin_users: Mutex<VecDeque<Result<UsersResponse>>>,
    admin_searches: Mutex<VecDeque<Result<SearchesResponse>>>,
    admin_statistics: Mutex<VecDeque<Result<StatisticsResponse>>>,
    admin_activity: Mutex<VecDeque<Result<ActivityPage>>>,
    admin_verify: Mutex<VecDeque<Result<VerifyReport>>>,
    admin_export: Mutex<VecDeque<Result<ExportBundle>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint names in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times an endpoint was called.
    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| name.as_str() == endpoint)
            .count()
    }

    /// The (limit, offset) pairs passed to `admin_activity`, in order.
    pub fn activity_requests(&self) -> Vec<(u32, u64)> {
        self.activity_requests.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &str) {
        self.calls.lock().unwrap().push(endpoint.to_string());
    }

    fn take<T>(&self, queue: &Mutex<VecDeque<Result<T>>>, endpoint: &str) -> Result<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PulseError::status(500, format!("no mock for {endpoint}"))))
    }

    pub fn push_me(&self, response: Result<MeResponse>) {
        self.me.lock().unwrap().push_back(response);
    }

    pub fn push_signup(&self, response: Result<AuthResponse>) {
        self.signup.lock().unwrap().push_back(response);
    }

    pub fn push_login(&self, response: Result<AuthResponse>) {
        self.login.lock().unwrap().push_back(response);
    }

    pub fn push_logout(&self, response: Result<Acknowledged>) {
        self.logout.lock().unwrap().push_back(response);
    }

    pub fn push_trending(&self, response: Result<TrendingResponse>) {
        self.trending.lock().unwrap().push_back(response);
    }

    pub fn push_fetch_news(&self, response: Result<FetchNewsResponse>) {
        self.fetch_news.lock().unwrap().push_back(response);
    }

    pub fn push_analyze(&self, response: Result<AnalysisResult>) {
        self.analyze.lock().unwrap().push_back(response);
    }

    pub fn push_history(&self, response: Result<HistoryOverview>) {
        self.history.lock().unwrap().push_back(response);
    }

    pub fn push_admin_login(&self, response: Result<Acknowledged>) {
        self.admin_login.lock().unwrap().push_back(response);
    }

    pub fn push_admin_logout(&self, response: Result<Acknowledged>) {
        self.admin_logout.lock().unwrap().push_back(response);
    }

    pub fn push_admin_me(&self, response: Result<AdminMeResponse>) {
        self.admin_me.lock().unwrap().push_back(response);
    }

    pub fn push_admin_users(&self, response: Result<UsersResponse>) {
        self.admin_users.lock().unwrap().push_back(response);
    }

    pub fn push_admin_searches(&self, response: Result<SearchesResponse>) {
        self.admin_searches.lock().unwrap().push_back(response);
    }

    pub fn push_admin_statistics(&self, response: Result<StatisticsResponse>) {
        self.admin_statistics.lock().unwrap().push_back(response);
    }

    pub fn push_admin_activity(&self, response: Result<ActivityPage>) {
        self.admin_activity.lock().unwrap().push_back(response);
    }

    pub fn push_admin_verify(&self, response: Result<VerifyReport>) {
        self.admin_verify.lock().unwrap().push_back(response);
    }

    pub fn push_admin_export(&self, response: Result<ExportBundle>) {
        self.admin_export.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn me(&self) -> Result<MeResponse> {
        self.record("me");
        self.take(&self.me, "me")
    }

    async fn signup(&self, _username: &str, _password: &str) -> Result<AuthResponse> {
        self.record("signup");
        self.take(&self.signup, "signup")
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<AuthResponse> {
        self.record("login");
        self.take(&self.login, "login")
    }

    async fn logout(&self) -> Result<Acknowledged> {
        self.record("logout");
        self.take(&self.logout, "logout")
    }

    async fn trending(&self) -> Result<TrendingResponse> {
        self.record("trending");
        self.take(&self.trending, "trending")
    }

    async fn fetch_news(&self, _keyword: &str) -> Result<FetchNewsResponse> {
        self.record("fetch_news");
        self.take(&self.fetch_news, "fetch_news")
    }

    async fn analyze(&self, _news_text: &str, _topic: &str) -> Result<AnalysisResult> {
        self.record("analyze");
        self.take(&self.analyze, "analyze")
    }

    async fn history(&self) -> Result<HistoryOverview> {
        self.record("history");
        self.take(&self.history, "history")
    }

    async fn admin_login(&self, _username: &str, _password: &str) -> Result<Acknowledged> {
        self.record("admin_login");
        self.take(&self.admin_login, "admin_login")
    }

    async fn admin_logout(&self) -> Result<Acknowledged> {
        self.record("admin_logout");
        self.take(&self.admin_logout, "admin_logout")
    }

    async fn admin_me(&self) -> Result<AdminMeResponse> {
        self.record("admin_me");
        self.take(&self.admin_me, "admin_me")
    }

    async fn admin_users(&self) -> Result<UsersResponse> {
        self.record("admin_users");
        self.take(&self.admin_users, "admin_users")
    }

    async fn admin_searches(&self) -> Result<SearchesResponse> {
        self.record("admin_searches");
        self.take(&self.admin_searches, "admin_searches")
    }

    async fn admin_statistics(&self) -> Result<StatisticsResponse> {
        self.record("admin_statistics");
        self.take(&self.admin_statistics, "admin_statistics")
    }

    async fn admin_activity(&self, limit: u32, offset: u64) -> Result<ActivityPage> {
        self.record("admin_activity");
        self.activity_requests.lock().unwrap().push((limit, offset));
        self.take(&self.admin_activity, "admin_activity")
    }

    async fn admin_verify(&self) -> Result<VerifyReport> {
        self.record("admin_verify");
        self.take(&self.admin_verify, "admin_verify")
    }

    async fn admin_export(&self) -> Result<ExportBundle> {
        self.record("admin_export");
        self.take(&self.admin_export, "admin_export")
    }
}
