// Backend API HTTP client
//
// Wraps `reqwest::Client` with ecobin-specific URL construction and error
// normalization. Every endpoint returns its raw wire type -- domain mapping
// lives in ecobin-core. The client never retries; callers decide.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    BinsResponse, ErrorBody, HistoryResponse, LeaderboardResponse, LoginResponse,
    RecentLogsResponse, RegisterRequest, RegisterResponse, ResetBinResponse, StatsResponse,
};

/// Base URL used when no configuration is supplied (local development backend).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Raw HTTP client for the ecobin backend API.
///
/// All endpoints live under `{base_url}/api/...` and speak JSON. Non-2xx
/// responses are normalized into [`Error::Api`] with the message taken from
/// the body's `error` or `message` field; transport and parse failures map
/// to [`Error::Transport`] / [`Error::Deserialization`] without a status.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a base URL and transport config.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client against the default local development backend.
    pub fn local() -> Result<Self, Error> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Self::new(base_url, &TransportConfig::default())
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Authenticate with username and password.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        self.post("api/login", &body).await.map_err(|e| match e {
            // Scope login failures to an authentication error so callers
            // can distinguish bad credentials from an unreachable backend.
            Error::Api { message, status } if status == 401 || status == 403 => {
                Error::Authentication { message }
            }
            other => other,
        })
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, Error> {
        self.post("api/register", request).await
    }

    // ── User data ────────────────────────────────────────────────────

    /// Identity snapshot with lifetime recycling totals.
    pub async fn user_stats(&self, user_id: i64) -> Result<StatsResponse, Error> {
        self.get(&format!("api/user/{user_id}/stats")).await
    }

    /// The user's most recent waste logs, newest first.
    pub async fn user_history(&self, user_id: i64, limit: usize) -> Result<HistoryResponse, Error> {
        self.get(&format!("api/user/{user_id}/history?limit={limit}"))
            .await
    }

    /// Top users by points.
    pub async fn leaderboard(&self, limit: usize) -> Result<LeaderboardResponse, Error> {
        self.get(&format!("api/leaderboard?limit={limit}")).await
    }

    // ── Bins & admin ─────────────────────────────────────────────────

    /// All smart bins with raw fill telemetry.
    pub async fn bins(&self) -> Result<BinsResponse, Error> {
        self.get("api/admin/bins").await
    }

    /// Zero a bin's fill level (admin).
    pub async fn reset_bin(&self, bin_id: i64) -> Result<ResetBinResponse, Error> {
        self.post("api/admin/reset-bin", &json!({ "bin_id": bin_id }))
            .await
    }

    /// System-wide recent activity with actor names (admin).
    pub async fn recent_logs(&self, limit: usize) -> Result<RecentLogsResponse, Error> {
        self.get(&format!("api/admin/recent-logs?limit={limit}"))
            .await
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    /// Send a GET request and parse the JSON response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Send a POST request with a JSON body and parse the JSON response.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_response(resp).await
    }

    /// Turn a response into the expected payload or a normalized error.
    ///
    /// Non-2xx bodies are parsed as [`ErrorBody`]; an unparseable error body
    /// still produces `Error::Api` with the generic fallback message.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(Error::Api {
                message: parsed.into_message(),
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
