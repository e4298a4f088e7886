//! Wire models for the contest service API.

use serde::{Deserialize, Serialize};

/// Organization (university) as returned by the contest API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shortname: Option<String>,
}

/// Team as returned by the contest API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// User as returned by the contest API.
///
/// `id` is the external identifier; `userid` is the internal numeric id the
/// jury interface addresses users by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub userid: Option<i64>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Organization-creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganization {
    pub id: String,
    pub shortname: String,
    pub name: String,
    pub formal_name: String,
    pub country: String,
}

/// Team-creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeam {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub organization_id: String,
    pub group_ids: Vec<String>,
}

/// User-creation payload.
///
/// Deliberately carries no password: the structured API never receives the
/// generated credential. Credentials are applied afterwards through the jury
/// form channel.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub enabled: bool,
    pub team_id: String,
    pub roles: Vec<String>,
}
