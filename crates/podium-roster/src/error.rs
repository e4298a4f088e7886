//! Roster error types.

use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Errors that make the whole roster unusable.
///
/// Malformed individual rows are not errors; they are skipped with a
/// diagnostic during parsing.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
