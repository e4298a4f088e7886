//! Roster-to-directory reconciliation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use podium_roster::RosterRecord;

use crate::snapshot::DirectorySnapshot;

/// A roster record scheduled for provisioning, with its derived username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRecord {
    pub team: String,
    pub uni_local: String,
    pub uni_canonical: String,
    pub external_id: String,
    pub username: String,
}

impl PlannedRecord {
    /// Organization display name: the canonical name, else the local roster
    /// name, else a fixed placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.uni_canonical.is_empty() {
            &self.uni_canonical
        } else if !self.uni_local.is_empty() {
            &self.uni_local
        } else {
            "Unknown"
        }
    }
}

/// Ordered set of roster records that have no corresponding remote team.
///
/// Computed once per run, written to the preview artifact before any
/// mutation, and executed unchanged — there is no re-diff after the
/// operator confirms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionPlan {
    pub records: Vec<PlannedRecord>,
}

impl ProvisionPlan {
    /// Diff the roster against the snapshot and derive usernames.
    ///
    /// Processing follows roster order. A username is reserved the moment it
    /// is derived, before any network call, so colliding external ids never
    /// produce the same username within one run and earlier rows always win
    /// the unsuffixed form; later collisions get the plan index appended.
    #[must_use]
    pub fn build(roster: &[RosterRecord], snapshot: &DirectorySnapshot) -> Self {
        let mut reserved: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        for record in roster {
            if snapshot.has_team(&record.team) {
                continue;
            }

            let index = records.len();
            let mut username = format!("t{}", record.external_id);
            if snapshot.has_username(&username) || reserved.contains(&username) {
                username = format!("t{}_{}", record.external_id, index);
            }
            reserved.insert(username.clone());

            if snapshot.id_in_use(&record.external_id) {
                warn!(
                    team = %record.team,
                    external_id = %record.external_id,
                    "external id already taken by a remote team or user"
                );
            }

            records.push(PlannedRecord {
                team: record.team.clone(),
                uni_local: record.uni_local.clone(),
                uni_canonical: record.uni_canonical.clone(),
                external_id: record.external_id.clone(),
                username,
            });
        }

        info!(
            roster = roster.len(),
            planned = records.len(),
            "reconciliation complete"
        );
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
