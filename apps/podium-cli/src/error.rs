//! CLI error types and exit codes

use thiserror::Error;

use podium_judge::JudgeClientError;
use podium_provision::ProvisionError;

/// Exit codes for the CLI
/// - 0: Success (including a declined confirmation)
/// - 1: General error
/// - 2: Authentication error
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(#[from] podium_roster::RosterError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check that the service base URL is correct\n  - Verify the host is reachable\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Authentication(_) => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) => 4,
            CliError::Server(_) => 5,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::Config(_) | CliError::Roster(_) | CliError::Io(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => {
                Some("Check the PODIUM_* environment variables; a .env file is read if present.")
            }
            CliError::Authentication(_) => {
                Some("Verify PODIUM_API_USERNAME, PODIUM_API_PASSWORD, and PODIUM_SESSION_COOKIE.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

impl From<JudgeClientError> for CliError {
    fn from(e: JudgeClientError) -> Self {
        match e {
            JudgeClientError::InvalidConfig(m) => CliError::Config(m),
            JudgeClientError::Network(m) => CliError::Network(m),
            JudgeClientError::ConnectionFailed(m) => CliError::ConnectionFailed(m),
            JudgeClientError::Auth { detail, .. } => CliError::Authentication(detail),
            JudgeClientError::NotFound(m) => CliError::Validation(format!("not found: {m}")),
            JudgeClientError::Api { status, detail } => CliError::Api {
                status,
                message: detail,
            },
            JudgeClientError::Parse(m) => CliError::Server(m),
            JudgeClientError::MissingTeamValue => CliError::Server(e.to_string()),
        }
    }
}

impl From<ProvisionError> for CliError {
    fn from(e: ProvisionError) -> Self {
        match e {
            ProvisionError::DirectoryFetch(inner) => inner.into(),
            ProvisionError::Io(e) => CliError::Io(e.to_string()),
            ProvisionError::Json(e) => CliError::Io(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
