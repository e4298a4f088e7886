//! Normalized roster records.

use serde::{Deserialize, Serialize};

/// One valid roster row, normalized.
///
/// Immutable after parsing; records keep the order of the rows they came
/// from, and that order is preserved through planning and execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Team name as given in the roster.
    pub team: String,
    /// University name in the roster's local language.
    pub uni_local: String,
    /// Canonical (English) university name after lookup resolution.
    pub uni_canonical: String,
    /// Roster-assigned external identifier for the team.
    pub external_id: String,
}
