//! HTTP client for the contest service's structured API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{JudgeClientError, JudgeClientResult};
use crate::models::{CreateOrganization, CreateTeam, CreateUser, Organization, Team, User};

/// Basic-auth client for the contest service REST API.
///
/// Wraps `reqwest::Client` with the listing and creation operations the
/// provisioning pipeline needs. Every request is individually awaited; the
/// client issues no concurrent or pipelined calls.
#[derive(Debug, Clone)]
pub struct JudgeClient {
    base_url: String,
    username: String,
    password: String,
    http_client: Client,
}

impl JudgeClient {
    /// Create a new API client.
    pub fn new(
        base_url: String,
        username: String,
        password: String,
        timeout: Duration,
    ) -> JudgeClientResult<Self> {
        let http_client = Client::builder().timeout(timeout).build().map_err(|e| {
            JudgeClientError::InvalidConfig(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self::with_http_client(
            base_url,
            username,
            password,
            http_client,
        ))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: String,
        username: String,
        password: String,
        http_client: Client,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            username,
            password,
            http_client,
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Listing ───────────────────────────────────────────────────────

    /// List the organizations registered for a contest.
    pub async fn list_organizations(
        &self,
        contest_id: &str,
    ) -> JudgeClientResult<Vec<Organization>> {
        let url = format!(
            "{}/api/v4/contests/{}/organizations",
            self.base_url, contest_id
        );
        self.get(&url).await
    }

    /// List the teams registered for a contest.
    pub async fn list_teams(&self, contest_id: &str) -> JudgeClientResult<Vec<Team>> {
        let url = format!("{}/api/v4/contests/{}/teams", self.base_url, contest_id);
        self.get(&url).await
    }

    /// List all user accounts (users are global, not contest-scoped).
    pub async fn list_users(&self) -> JudgeClientResult<Vec<User>> {
        let url = format!("{}/api/v4/users", self.base_url);
        self.get(&url).await
    }

    /// Fetch a single user by username.
    pub async fn get_user(&self, username: &str) -> JudgeClientResult<User> {
        let url = format!("{}/api/v4/users/{}", self.base_url, username);
        self.get(&url).await
    }

    // ── Creation ──────────────────────────────────────────────────────

    /// Create an organization within a contest.
    pub async fn create_organization(
        &self,
        contest_id: &str,
        organization: &CreateOrganization,
    ) -> JudgeClientResult<Organization> {
        let url = format!(
            "{}/api/v4/contests/{}/organizations",
            self.base_url, contest_id
        );
        self.post(&url, organization).await
    }

    /// Create a team within a contest.
    pub async fn create_team(
        &self,
        contest_id: &str,
        team: &CreateTeam,
    ) -> JudgeClientResult<Team> {
        let url = format!("{}/api/v4/contests/{}/teams", self.base_url, contest_id);
        self.post(&url, team).await
    }

    /// Create a user account.
    pub async fn create_user(&self, user: &CreateUser) -> JudgeClientResult<User> {
        let url = format!("{}/api/v4/users", self.base_url);
        self.post(&url, user).await
    }

    // ── Internal HTTP methods ─────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> JudgeClientResult<T> {
        debug!("API GET {}", url);
        let response = self
            .http_client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> JudgeClientResult<T> {
        debug!("API POST {}", url);
        let response = self
            .http_client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ── Response handling ─────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> JudgeClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| JudgeClientError::Parse(e.to_string()))
        } else {
            self.handle_error_response(response).await
        }
    }

    async fn handle_error_response<T>(
        &self,
        response: reqwest::Response,
    ) -> JudgeClientResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());

        match status {
            StatusCode::NOT_FOUND => Err(JudgeClientError::NotFound(body)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JudgeClientError::Auth {
                status: status.as_u16(),
                detail: body,
            }),
            _ => {
                let detail = if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                };
                Err(JudgeClientError::Api {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}
