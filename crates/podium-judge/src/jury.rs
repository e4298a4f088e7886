//! Session-authenticated client for the jury web interface.
//!
//! The structured API cannot set a user's password, role, or team binding.
//! Those fields are only writable through the jury edit form, which in turn
//! requires the currently selected team value scraped from the rendered
//! page, since that value is not derivable from any API response.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::error::{JudgeClientError, JudgeClientResult};

/// Cookie name the jury interface keys its session on.
const SESSION_COOKIE_NAME: &str = "PHPSESSID";

static TEAM_SELECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<select[^>]*name="user\[team\]"[^>]*>(.*?)</select>"#)
        .expect("team select pattern is valid")
});

static OPTION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<option\b[^>]*>").expect("option tag pattern is valid"));

static VALUE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"value="([^"]*)""#).expect("value attr pattern is valid"));

/// Form-encoded payload for the jury user edit endpoint.
///
/// Field names match what the edit page's form serializes in a browser,
/// including the repeated role field and the submit marker.
#[derive(Debug, Clone)]
pub struct UserEditForm {
    pub external_id: String,
    pub name: String,
    pub password: String,
    pub enabled: bool,
    pub team: String,
    pub role_codes: Vec<u8>,
}

impl UserEditForm {
    /// Flatten into ordered form pairs.
    ///
    /// The `user[save]` marker appears twice — once before the role block
    /// and once as the final field — mirroring the serialized browser form
    /// the endpoint expects.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("user[externalid]", self.external_id.clone()),
            ("user[name]", self.name.clone()),
            ("user[plainPassword]", self.password.clone()),
            (
                "user[enabled]",
                if self.enabled { "1" } else { "0" }.to_string(),
            ),
            ("user[team]", self.team.clone()),
            ("user[save]", String::new()),
        ];
        for code in &self.role_codes {
            pairs.push(("user[user_roles][]", code.to_string()));
        }
        pairs.push(("user[save]", String::new()));
        pairs
    }
}

/// Session-cookie client for the jury HTML interface.
#[derive(Debug, Clone)]
pub struct JuryClient {
    base_url: String,
    session_cookie: String,
    http_client: Client,
}

impl JuryClient {
    /// Create a new jury client.
    pub fn new(
        base_url: String,
        session_cookie: String,
        timeout: Duration,
    ) -> JudgeClientResult<Self> {
        let http_client = Client::builder().timeout(timeout).build().map_err(|e| {
            JudgeClientError::InvalidConfig(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self::with_http_client(base_url, session_cookie, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: String,
        session_cookie: String,
        http_client: Client,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            session_cookie,
            http_client,
        }
    }

    fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_COOKIE_NAME, self.session_cookie)
    }

    fn edit_url(&self, jury_user_id: i64) -> String {
        format!("{}/jury/users/{}/edit", self.base_url, jury_user_id)
    }

    /// Fetch a user's edit page and extract the currently selected team
    /// option value.
    pub async fn fetch_selected_team(&self, jury_user_id: i64) -> JudgeClientResult<String> {
        let url = self.edit_url(jury_user_id);
        debug!("jury GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Cookie", self.cookie_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JudgeClientError::Api {
                status: status.as_u16(),
                detail: "edit page fetch failed".to_string(),
            });
        }

        let html = response.text().await?;
        extract_selected_team(&html).ok_or(JudgeClientError::MissingTeamValue)
    }

    /// Submit the user edit form.
    ///
    /// The jury interface answers a successful save with a redirect, which
    /// the client follows; any non-success final status is an error.
    pub async fn update_user(
        &self,
        jury_user_id: i64,
        form: &UserEditForm,
    ) -> JudgeClientResult<()> {
        let url = self.edit_url(jury_user_id);
        debug!("jury POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Cookie", self.cookie_header())
            .form(&form.pairs())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(JudgeClientError::Api {
                status: status.as_u16(),
                detail: "user edit submission rejected".to_string(),
            })
        }
    }
}

/// Pull the selected `user[team]` option value out of the edit page markup.
#[must_use]
pub fn extract_selected_team(html: &str) -> Option<String> {
    let select = TEAM_SELECT.captures(html)?.get(1)?.as_str();
    for tag in OPTION_TAG.find_iter(select) {
        let tag = tag.as_str();
        if tag.contains("selected") {
            if let Some(caps) = VALUE_ATTR.captures(tag) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}
