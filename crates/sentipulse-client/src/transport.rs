//! HTTP transport shared by every backend call.
//!
//! One best-effort attempt per call: no retries, no timeouts, no caching.
//! Retry is always a manual repeat of the triggering user action.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use sentipulse_core::error::{PulseError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Transport that talks to the backend API.
///
/// Carries a persistent cookie store so the server-issued session cookie is
/// forwarded on every call, and a JSON content-type default that individual
/// requests may override.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base: String,
}

impl Transport {
    /// Creates a transport against a resolved API base URL.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the underlying HTTP client cannot be
    /// built.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|err| PulseError::config(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    /// The resolved API base this transport talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issues a GET request and decodes the response envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// Issues a POST request with a JSON body and decodes the response
    /// envelope.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// Issues a bodyless POST request (logout-style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.post(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|err| PulseError::network(format!("Request failed: {err}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| PulseError::network(format!("Failed to read response body: {err}")))?;
        tracing::debug!("{} -> {}", self.base, status);
        decode_envelope(status, &body)
    }
}

/// Decodes the uniform response envelope.
///
/// The body is parsed as JSON leniently: a body that is not JSON counts as
/// an empty object, never a hard failure. A non-success status fails with
/// the server-supplied `error` field, or `Request failed (<status>)` when
/// absent. Success bodies are decoded into the endpoint's explicit response
/// type and fail fast on a shape mismatch.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value: Value =
        serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()));
    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(match message {
            Some(message) => PulseError::status(status.as_u16(), message),
            None => PulseError::request_failed(status.as_u16()),
        });
    }
    serde_json::from_value(value).map_err(|err| PulseError::decode(err.to_string()))
}
