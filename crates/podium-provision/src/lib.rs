//! Reconciliation-and-provisioning pipeline.
//!
//! The pipeline runs in two independent passes that communicate only through
//! durable JSON artifacts:
//!
//! 1. **Provisioning** — [`snapshot::DirectorySnapshot`] captures remote
//!    state, [`plan::ProvisionPlan`] diffs the roster against it, and
//!    [`executor::Executor`] creates the missing organizations, teams, and
//!    users with generated credentials.
//! 2. **Patching** — [`patch::PatchAgent`] replays the created-accounts
//!    artifact through the jury form channel to set the fields the
//!    structured API cannot: password, role, and team binding.

pub mod artifacts;
pub mod error;
pub mod executor;
pub mod patch;
pub mod plan;
pub mod snapshot;

pub use error::{ProvisionError, ProvisionResult};
pub use executor::{ExecutionReport, Executor, ProvisionedUser};
pub use patch::{PatchAgent, PatchSummary};
pub use plan::{PlannedRecord, ProvisionPlan};
pub use snapshot::DirectorySnapshot;
