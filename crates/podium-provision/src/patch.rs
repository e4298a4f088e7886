//! Credential patch pass.
//!
//! A second, independent pass over previously created users that sets the
//! fields the structured API cannot: password, role, and team binding. The
//! pass reads the created-accounts artifact, never retries, and never
//! aborts — every user is attempted exactly once.

use tracing::{error, info};

use podium_judge::jury::{JuryClient, UserEditForm};
use podium_judge::{JudgeClient, JudgeClientError, JudgeClientResult};

use crate::executor::ProvisionedUser;

/// Numeric role codes understood by the jury form. API roles missing from
/// this table are dropped silently.
const ROLE_CODES: &[(&str, u8)] = &[("admin", 1), ("jury", 2), ("team", 3)];

/// Map API-reported roles to jury form role codes.
#[must_use]
pub fn map_roles(roles: &[String]) -> Vec<u8> {
    roles
        .iter()
        .filter_map(|role| {
            ROLE_CODES
                .iter()
                .find(|(name, _)| name == role)
                .map(|(_, code)| *code)
        })
        .collect()
}

/// Per-run patch tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Replays created accounts through the jury form channel.
pub struct PatchAgent<'a> {
    api: &'a JudgeClient,
    jury: &'a JuryClient,
}

impl<'a> PatchAgent<'a> {
    #[must_use]
    pub fn new(api: &'a JudgeClient, jury: &'a JuryClient) -> Self {
        Self { api, jury }
    }

    /// Patch every user, in artifact order.
    ///
    /// A failed user is counted and skipped; processing continues
    /// unconditionally to the next one.
    pub async fn run(&self, users: &[ProvisionedUser]) -> PatchSummary {
        let mut summary = PatchSummary::default();

        for user in users {
            match self.patch_user(user).await {
                Ok(()) => {
                    info!(username = %user.username, "user patched");
                    summary.succeeded += 1;
                }
                Err(e) => {
                    error!(username = %user.username, error = %e, "patch failed");
                    summary.failed += 1;
                }
            }
        }

        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "patch pass finished"
        );
        summary
    }

    async fn patch_user(&self, user: &ProvisionedUser) -> JudgeClientResult<()> {
        // Live record first: the jury interface addresses users by their
        // internal numeric id, which only the API exposes.
        let api_user = self.api.get_user(&user.username).await?;
        let jury_user_id = api_user
            .userid
            .ok_or_else(|| JudgeClientError::Parse("user record has no jury id".to_string()))?;

        // The form requires the current team binding, which only the edit
        // page exposes.
        let team = self.jury.fetch_selected_team(jury_user_id).await?;

        let form = UserEditForm {
            external_id: api_user.id.clone(),
            name: api_user.team.clone().unwrap_or_else(|| user.team.clone()),
            password: user.password.clone(),
            enabled: true,
            team,
            role_codes: map_roles(&api_user.roles),
        };
        self.jury.update_user(jury_user_id, &form).await
    }
}
