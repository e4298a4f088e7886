//! Ordered execution of a provision plan.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use podium_judge::models::{CreateOrganization, CreateTeam, CreateUser};
use podium_judge::{JudgeClient, JudgeClientResult};
use podium_roster::slugify;

use crate::plan::{PlannedRecord, ProvisionPlan};
use crate::snapshot::DirectorySnapshot;

/// Country code stamped on created organizations.
const ORGANIZATION_COUNTRY: &str = "IRN";

/// Group every created team is assigned to.
const PARTICIPANTS_GROUP: &str = "participants";

/// Role given to created users.
const TEAM_ROLE: &str = "team";

/// Random bytes behind a generated password (12 hex characters).
const PASSWORD_BYTES: usize = 6;

/// Account created during a run; the patch pass consumes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedUser {
    pub team: String,
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Per-run execution tally.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    /// Accounts created, in plan order.
    pub created: Vec<ProvisionedUser>,
    /// Number of records abandoned after a failed creation call.
    pub failed: usize,
}

/// Executes a provision plan record by record, in plan order.
pub struct Executor<'a> {
    client: &'a JudgeClient,
    contest_id: &'a str,
    dry_run: bool,
}

impl<'a> Executor<'a> {
    #[must_use]
    pub fn new(client: &'a JudgeClient, contest_id: &'a str, dry_run: bool) -> Self {
        Self {
            client,
            contest_id,
            dry_run,
        }
    }

    /// Run the plan.
    ///
    /// A record whose organization, team, or user call fails is abandoned
    /// and the loop moves on to the next one; entities already created for
    /// the failed record are not rolled back. Re-running the pipeline is
    /// safe because existence checks make creation idempotent at the
    /// entity-name level.
    pub async fn run(
        &self,
        plan: &ProvisionPlan,
        snapshot: &mut DirectorySnapshot,
    ) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for record in &plan.records {
            match self.provision_record(record, snapshot).await {
                Ok(Some(user)) => report.created.push(user),
                Ok(None) => {} // dry-run
                Err(e) => {
                    error!(
                        team = %record.team,
                        username = %record.username,
                        error = %e,
                        "record provisioning failed, continuing with next record"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            created = report.created.len(),
            failed = report.failed,
            dry_run = self.dry_run,
            "provisioning pass finished"
        );
        report
    }

    async fn provision_record(
        &self,
        record: &PlannedRecord,
        snapshot: &mut DirectorySnapshot,
    ) -> JudgeClientResult<Option<ProvisionedUser>> {
        let organization_id = self.resolve_organization(record, snapshot).await?;

        // Generated independently of any remote call, in dry-run too, so a
        // rehearsal exercises the same code path as a live run.
        let password = generate_password();

        if self.dry_run {
            info!(
                team = %record.team,
                username = %record.username,
                organization_id = %organization_id,
                "dry-run: skipping team and user creation"
            );
            return Ok(None);
        }

        let team = CreateTeam {
            id: record.external_id.clone(),
            name: record.team.clone(),
            display_name: record.team.clone(),
            description: String::new(),
            organization_id,
            group_ids: vec![PARTICIPANTS_GROUP.to_string()],
        };
        self.client.create_team(self.contest_id, &team).await?;
        info!(team = %record.team, id = %record.external_id, "team created");

        let user = CreateUser {
            id: record.external_id.clone(),
            username: record.username.clone(),
            name: record.team.clone(),
            email: None,
            enabled: true,
            team_id: record.external_id.clone(),
            roles: vec![TEAM_ROLE.to_string()],
        };
        self.client.create_user(&user).await?;
        info!(username = %record.username, "user created");

        Ok(Some(ProvisionedUser {
            team: record.team.clone(),
            id: record.external_id.clone(),
            username: record.username.clone(),
            password,
        }))
    }

    /// Reuse an existing organization when the display name or shortname is
    /// already indexed; create it otherwise.
    ///
    /// The index is updated under both keys either way, so records later in
    /// the run resolve to the same id instead of creating duplicates for
    /// teams sharing a university. In dry-run the shortname stands in for
    /// the id the service would have assigned.
    async fn resolve_organization(
        &self,
        record: &PlannedRecord,
        snapshot: &mut DirectorySnapshot,
    ) -> JudgeClientResult<String> {
        let display_name = record.display_name().to_string();
        let shortname = slugify(&display_name);

        if let Some(id) = snapshot.organization_id(&display_name) {
            return Ok(id.to_string());
        }
        if !shortname.is_empty() {
            if let Some(id) = snapshot.organization_id(&shortname) {
                return Ok(id.to_string());
            }
        }

        let id = if self.dry_run {
            if shortname.is_empty() {
                display_name.clone()
            } else {
                shortname.clone()
            }
        } else {
            let payload = CreateOrganization {
                id: shortname.clone(),
                shortname: shortname.clone(),
                name: display_name.clone(),
                formal_name: display_name.clone(),
                country: ORGANIZATION_COUNTRY.to_string(),
            };
            let created = self
                .client
                .create_organization(self.contest_id, &payload)
                .await?;
            info!(
                name = %display_name,
                shortname = %shortname,
                id = %created.id,
                "organization created"
            );
            created.id
        };

        snapshot.insert_organization(display_name, id.clone());
        if !shortname.is_empty() {
            snapshot.insert_organization(shortname, id.clone());
        }
        Ok(id)
    }
}

/// Generate a random hexadecimal credential from the operating system RNG.
#[must_use]
pub fn generate_password() -> String {
    let mut bytes = [0u8; PASSWORD_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
