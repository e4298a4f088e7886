//! Baseline directory state fetched from the contest service.

use std::collections::{HashMap, HashSet};

use tracing::info;

use podium_judge::models::{Organization, Team, User};
use podium_judge::JudgeClient;

use crate::error::{ProvisionError, ProvisionResult};

/// Remote directory state at the start of a run.
///
/// Built once before planning and never refreshed mid-run. The only
/// mutation afterwards is the executor's organization cache update, which
/// lets records later in the same run resolve to organizations created
/// earlier in it.
#[derive(Debug, Default)]
pub struct DirectorySnapshot {
    /// Organization name or shortname → remote id.
    organizations: HashMap<String, String>,
    /// Team name → remote id.
    teams: HashMap<String, String>,
    /// Username → remote id.
    usernames: HashMap<String, String>,
    /// Ids already taken by teams or users.
    used_ids: HashSet<String>,
}

impl DirectorySnapshot {
    /// Fetch organizations, teams, and users and build the lookup indices.
    ///
    /// Any listing failure is fatal: without a complete baseline the diff
    /// cannot safely decide what is missing.
    pub async fn fetch(client: &JudgeClient, contest_id: &str) -> ProvisionResult<Self> {
        let organizations = client
            .list_organizations(contest_id)
            .await
            .map_err(ProvisionError::DirectoryFetch)?;
        let teams = client
            .list_teams(contest_id)
            .await
            .map_err(ProvisionError::DirectoryFetch)?;
        let users = client
            .list_users()
            .await
            .map_err(ProvisionError::DirectoryFetch)?;

        Ok(Self::from_listings(organizations, teams, users))
    }

    /// Build the indices from already-fetched listings.
    #[must_use]
    pub fn from_listings(
        organizations: Vec<Organization>,
        teams: Vec<Team>,
        users: Vec<User>,
    ) -> Self {
        let mut snapshot = Self::default();

        for organization in organizations {
            if let Some(name) = organization.name {
                snapshot.organizations.insert(name, organization.id.clone());
            }
            if let Some(shortname) = organization.shortname {
                snapshot.organizations.insert(shortname, organization.id);
            }
        }
        for team in teams {
            snapshot.used_ids.insert(team.id.clone());
            snapshot.teams.insert(team.name, team.id);
        }
        for user in users {
            snapshot.used_ids.insert(user.id.clone());
            snapshot.usernames.insert(user.username, user.id);
        }

        info!(
            organizations = snapshot.organizations.len(),
            teams = snapshot.teams.len(),
            users = snapshot.usernames.len(),
            "directory snapshot built"
        );
        snapshot
    }

    /// Look up an organization id by display name or shortname.
    #[must_use]
    pub fn organization_id(&self, key: &str) -> Option<&str> {
        self.organizations.get(key).map(String::as_str)
    }

    /// Whether a team with this name already exists remotely.
    #[must_use]
    pub fn has_team(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }

    /// Whether this username is already taken remotely.
    #[must_use]
    pub fn has_username(&self, username: &str) -> bool {
        self.usernames.contains_key(username)
    }

    /// Whether a team or user already occupies this id.
    #[must_use]
    pub fn id_in_use(&self, id: &str) -> bool {
        self.used_ids.contains(id)
    }

    /// Record an organization resolved or created during execution so later
    /// records in the same run reuse it.
    pub fn insert_organization(&mut self, key: String, id: String) {
        self.organizations.insert(key, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(id: &str, name: Option<&str>, shortname: Option<&str>) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.map(str::to_string),
            shortname: shortname.map(str::to_string),
        }
    }

    #[test]
    fn test_indexes_name_and_shortname() {
        let snapshot = DirectorySnapshot::from_listings(
            vec![organization(
                "1",
                Some("Yazd University"),
                Some("yazd-university"),
            )],
            vec![],
            vec![],
        );

        assert_eq!(snapshot.organization_id("Yazd University"), Some("1"));
        assert_eq!(snapshot.organization_id("yazd-university"), Some("1"));
        assert_eq!(snapshot.organization_id("other"), None);
    }

    #[test]
    fn test_used_ids_cover_teams_and_users() {
        let snapshot = DirectorySnapshot::from_listings(
            vec![],
            vec![Team {
                id: "42".to_string(),
                name: "Alpha Squad".to_string(),
            }],
            vec![User {
                id: "99".to_string(),
                username: "t99".to_string(),
                userid: Some(5),
                team: None,
                roles: vec![],
            }],
        );

        assert!(snapshot.id_in_use("42"));
        assert!(snapshot.id_in_use("99"));
        assert!(!snapshot.id_in_use("7"));
        assert!(snapshot.has_team("Alpha Squad"));
        assert!(snapshot.has_username("t99"));
    }
}
