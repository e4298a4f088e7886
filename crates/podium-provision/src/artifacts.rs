//! Durable run artifacts.
//!
//! The provisioning pass and the patch pass communicate only through these
//! files. That boundary is deliberate: the patch pass may run hours later
//! under a different session credential, so the created-accounts file is
//! the sole contract between them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ProvisionResult;
use crate::executor::ProvisionedUser;
use crate::plan::ProvisionPlan;

/// File name of the pre-run preview artifact.
pub const PREVIEW_FILE: &str = "teams_to_create.json";

/// File name of the post-run created-accounts artifact.
pub const CREATED_FILE: &str = "created_users.json";

/// Path of the preview artifact under a roster directory.
#[must_use]
pub fn preview_path(dir: &Path) -> PathBuf {
    dir.join(PREVIEW_FILE)
}

/// Path of the created-accounts artifact under a roster directory.
#[must_use]
pub fn created_path(dir: &Path) -> PathBuf {
    dir.join(CREATED_FILE)
}

/// Write the provision plan before any mutation happens.
pub fn write_preview(dir: &Path, plan: &ProvisionPlan) -> ProvisionResult<PathBuf> {
    let path = preview_path(dir);
    let json = serde_json::to_string_pretty(&plan.records)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), planned = plan.records.len(), "preview artifact written");
    Ok(path)
}

/// Write the created accounts after the run, however many records failed.
pub fn write_created(dir: &Path, users: &[ProvisionedUser]) -> ProvisionResult<PathBuf> {
    let path = created_path(dir);
    let json = serde_json::to_string_pretty(users)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), created = users.len(), "created-accounts artifact written");
    Ok(path)
}

/// Load a created-accounts artifact for the patch pass.
pub fn read_created(path: &Path) -> ProvisionResult<Vec<ProvisionedUser>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
