//! Roster file parsing.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::RosterResult;
use crate::names::canonical_university_name;
use crate::record::RosterRecord;

/// Read a roster file into normalized records.
///
/// Two row shapes are accepted:
///
/// - 5+ columns: `team, english_name, external_id, rank, local_name` — the
///   canonical name is the lookup of the local name, falling back to the
///   English column, falling back to the local name itself.
/// - exactly 3 columns (legacy): `team, name, external_id` — the given name
///   serves as both local and canonical.
///
/// Rows of any other width are skipped with a diagnostic; a malformed row
/// never fails the whole run. Fields are trimmed, quoting is tolerated, and
/// empty lines are ignored. Output preserves input row order.
pub fn read_roster(path: &Path) -> RosterResult<Vec<RosterRecord>> {
    debug!(path = %path.display(), "reading roster");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row_no = idx + 1;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = row_no, error = %e, "skipping unreadable roster row");
                continue;
            }
        };

        if row.iter().all(str::is_empty) {
            continue;
        }

        match row.len() {
            n if n >= 5 => {
                let team = row[0].to_string();
                let english = &row[1];
                let external_id = row[2].to_string();
                let local = &row[4];

                let canonical = canonical_university_name(local)
                    .map(str::to_string)
                    .or_else(|| (!english.is_empty()).then(|| english.to_string()))
                    .unwrap_or_else(|| local.to_string());

                debug!(
                    row = row_no,
                    team = %team,
                    local = %local,
                    canonical = %canonical,
                    external_id = %external_id,
                    "parsed roster row"
                );
                records.push(RosterRecord {
                    team,
                    uni_local: local.to_string(),
                    uni_canonical: canonical,
                    external_id,
                });
            }
            3 => {
                let team = row[0].to_string();
                let name = row[1].to_string();
                let external_id = row[2].to_string();

                debug!(
                    row = row_no,
                    team = %team,
                    name = %name,
                    external_id = %external_id,
                    "parsed legacy roster row"
                );
                records.push(RosterRecord {
                    team,
                    uni_local: name.clone(),
                    uni_canonical: name,
                    external_id,
                });
            }
            other => {
                warn!(row = row_no, columns = other, "skipping malformed roster row");
            }
        }
    }

    Ok(records)
}
