//! Typed wrappers for the backend endpoints.

use crate::dto::{
    Acknowledged, ActivityPage, AdminMeResponse, AuthResponse, ExportBundle, FetchNewsResponse,
    HistoryOverview, MeResponse, SearchesResponse, StatisticsResponse, TrendingResponse,
    UsersResponse, VerifyReport,
};
use crate::transport::Transport;
use sentipulse_core::Result;
use sentipulse_core::model::AnalysisResult;
use serde::Serialize;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct FetchNewsRequest<'a> {
    keyword: &'a str,
}

#[derive(Serialize)]
struct AnalyzeRequestBody<'a> {
    news_text: &'a str,
    topic: &'a str,
}

/// Client for the Sentipulse backend API.
///
/// One method per endpoint; the admin endpoints hang off [`ApiClient::admin`].
/// All calls share one [`Transport`] and therefore one session cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    /// Creates a client against a resolved API base URL.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(base)?,
        })
    }

    /// The resolved API base this client talks to.
    pub fn base(&self) -> &str {
        self.transport.base()
    }

    pub async fn me(&self) -> Result<MeResponse> {
        self.transport.get("/auth/me").await
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<AuthResponse> {
        self.transport
            .post("/auth/signup", &Credentials { username, password })
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        self.transport
            .post("/auth/login", &Credentials { username, password })
            .await
    }

    pub async fn logout(&self) -> Result<Acknowledged> {
        self.transport.post_empty("/auth/logout").await
    }

    pub async fn trending(&self) -> Result<TrendingResponse> {
        self.transport.get("/trending").await
    }

    pub async fn fetch_news(&self, keyword: &str) -> Result<FetchNewsResponse> {
        self.transport
            .post("/fetch-news", &FetchNewsRequest { keyword })
            .await
    }

    pub async fn analyze(&self, news_text: &str, topic: &str) -> Result<AnalysisResult> {
        self.transport
            .post("/analyze", &AnalyzeRequestBody { news_text, topic })
            .await
    }

    pub async fn history(&self) -> Result<HistoryOverview> {
        self.transport.get("/history").await
    }

    /// The admin endpoint group.
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi {
            transport: &self.transport,
        }
    }
}

/// The `/admin/*` endpoint group.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    transport: &'a Transport,
}

impl AdminApi<'_> {
    pub async fn login(&self, username: &str, password: &str) -> Result<Acknowledged> {
        self.transport
            .post("/admin/login", &Credentials { username, password })
            .await
    }

    pub async fn logout(&self) -> Result<Acknowledged> {
        self.transport.post_empty("/admin/logout").await
    }

    pub async fn me(&self) -> Result<AdminMeResponse> {
        self.transport.get("/admin/me").await
    }

    pub async fn users(&self) -> Result<UsersResponse> {
        self.transport.get("/admin/users").await
    }

    pub async fn searches(&self) -> Result<SearchesResponse> {
        self.transport.get("/admin/searches").await
    }

    pub async fn statistics(&self) -> Result<StatisticsResponse> {
        self.transport.get("/admin/statistics").await
    }

    /// One page of the activity log, `offset`-based.
    pub async fn activity(&self, limit: u32, offset: u64) -> Result<ActivityPage> {
        self.transport
            .get(&format!("/admin/activity?limit={limit}&offset={offset}"))
            .await
    }

    pub async fn verify(&self) -> Result<VerifyReport> {
        self.transport.get("/admin/verify").await
    }

    pub async fn export(&self) -> Result<ExportBundle> {
        self.transport.get("/admin/export").await
    }
}
