//! Pipeline error types.

use podium_judge::JudgeClientError;
use thiserror::Error;

pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors that abort a run.
///
/// Per-record and per-user failures are deliberately not represented here:
/// the executor and the patch agent catch those at the item boundary, log
/// them, and continue.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A baseline listing call failed. The run cannot safely proceed
    /// without a complete snapshot of remote state.
    #[error("directory snapshot failed: {0}")]
    DirectoryFetch(JudgeClientError),

    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
