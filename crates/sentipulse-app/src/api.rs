//! The backend API seam.
//!
//! Services and views depend on this trait instead of the concrete HTTP
//! client so tests can drive them with a recording mock.

use async_trait::async_trait;
use sentipulse_client::ApiClient;
use sentipulse_client::dto::{
    Acknowledged, ActivityPage, AdminMeResponse, AuthResponse, ExportBundle, FetchNewsResponse,
    HistoryOverview, MeResponse, SearchesResponse, StatisticsResponse, TrendingResponse,
    UsersResponse, VerifyReport,
};
use sentipulse_core::Result;
use sentipulse_core::model::AnalysisResult;

/// Every backend operation the application layer uses.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn me(&self) -> Result<MeResponse>;
    async fn signup(&self, username: &str, password: &str) -> Result<AuthResponse>;
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse>;
    async fn logout(&self) -> Result<Acknowledged>;
    async fn trending(&self) -> Result<TrendingResponse>;
    async fn fetch_news(&self, keyword: &str) -> Result<FetchNewsResponse>;
    async fn analyze(&self, news_text: &str, topic: &str) -> Result<AnalysisResult>;
    async fn history(&self) -> Result<HistoryOverview>;

    async fn admin_login(&self, username: &str, password: &str) -> Result<Acknowledged>;
    async fn admin_logout(&self) -> Result<Acknowledged>;
    async fn admin_me(&self) -> Result<AdminMeResponse>;
    async fn admin_users(&self) -> Result<UsersResponse>;
    async fn admin_searches(&self) -> Result<SearchesResponse>;
    async fn admin_statistics(&self) -> Result<StatisticsResponse>;
    async fn admin_activity(&self, limit: u32, offset: u64) -> Result<ActivityPage>;
    async fn admin_verify(&self) -> Result<VerifyReport>;
    async fn admin_export(&self) -> Result<ExportBundle>;
}

#[async_trait]
impl BackendApi for ApiClient {
    async fn me(&self) -> Result<MeResponse> {
        ApiClient::me(self).await
    }

    async fn signup(&self, username: &str, password: &str) -> Result<AuthResponse> {
        ApiClient::signup(self, username, password).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        ApiClient::login(self, username, password).await
    }

    async fn logout(&self) -> Result<Acknowledged> {
        ApiClient::logout(self).await
    }

    async fn trending(&self) -> Result<TrendingResponse> {
        ApiClient::trending(self).await
    }

    async fn fetch_news(&self, keyword: &str) -> Result<FetchNewsResponse> {
        ApiClient::fetch_news(self, keyword).await
    }

    async fn analyze(&self, news_text: &str, topic: &str) -> Result<AnalysisResult> {
        ApiClient::analyze(self, news_text, topic).await
    }

    async fn history(&self) -> Result<HistoryOverview> {
        ApiClient::history(self).await
    }

    async fn admin_login(&self, username: &str, password: &str) -> Result<Acknowledged> {
        self.admin().login(username, password).await
    }

    async fn admin_logout(&self) -> Result<Acknowledged> {
        self.admin().logout().await
    }

    async fn admin_me(&self) -> Result<AdminMeResponse> {
        self.admin().me().await
    }

    async fn admin_users(&self) -> Result<UsersResponse> {
        self.admin().users().await
    }

    async fn admin_searches(&self) -> Result<SearchesResponse> {
        self.admin().searches().await
    }

    async fn admin_statistics(&self) -> Result<StatisticsResponse> {
        self.admin().statistics().await
    }

    async fn admin_activity(&self, limit: u32, offset: u64) -> Result<ActivityPage> {
        self.admin().activity(limit, offset).await
    }

    async fn admin_verify(&self) -> Result<VerifyReport> {
        self.admin().verify().await
    }

    async fn admin_export(&self) -> Result<ExportBundle> {
        self.admin().export().await
    }
}
