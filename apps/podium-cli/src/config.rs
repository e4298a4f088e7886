//! Environment-based configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CliError, CliResult};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, supplied entirely through the environment.
///
/// There are no CLI flags for these values; the pipeline is meant to run
/// against one fixed deployment per working directory, with a `.env` file
/// carrying the deployment-specific values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the contest service.
    pub api_base: String,
    /// Contest the organizations and teams are scoped to.
    pub contest_id: String,
    /// Basic-auth credentials for the structured API.
    pub api_username: String,
    pub api_password: String,
    /// Session cookie value for the jury interface.
    pub session_cookie: String,
    /// Directory holding the roster and the run artifacts.
    pub roster_dir: PathBuf,
    /// Roster name; the file is `<roster_dir>/<roster_name>.csv`.
    pub roster_name: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> CliResult<Self> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// This allows tests to supply variables without mutating process-global
    /// environment state.
    pub fn from_reader<F>(reader: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let api_base = required(&reader, "PODIUM_API_BASE")?;
        let contest_id = required(&reader, "PODIUM_CONTEST_ID")?;
        let api_username = required(&reader, "PODIUM_API_USERNAME")?;
        let api_password = required(&reader, "PODIUM_API_PASSWORD")?;
        let session_cookie = required(&reader, "PODIUM_SESSION_COOKIE")?;
        let roster_dir = required(&reader, "PODIUM_ROSTER_DIR")?;
        let roster_name = required(&reader, "PODIUM_ROSTER_NAME")?;

        let timeout_secs = reader("PODIUM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| CliError::Config(format!("invalid PODIUM_TIMEOUT_SECS: {e}")))?;

        Ok(Self {
            api_base,
            contest_id,
            api_username,
            api_password,
            session_cookie,
            roster_dir: PathBuf::from(roster_dir),
            roster_name,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Path of the roster file for this run.
    #[must_use]
    pub fn roster_path(&self) -> PathBuf {
        self.roster_dir.join(format!("{}.csv", self.roster_name))
    }
}

fn required<F>(reader: &F, key: &str) -> CliResult<String>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match reader(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CliError::Config(format!(
            "missing required variable {key}"
        ))),
    }
}
