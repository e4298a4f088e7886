//! Roster parsing and name normalization for contest provisioning.
//!
//! Reads a delimited roster file into normalized [`RosterRecord`]s, resolving
//! localized university names to canonical English names and deriving the
//! ASCII shortnames used as stable secondary keys downstream.

pub mod error;
pub mod names;
pub mod parser;
pub mod record;
pub mod slug;

pub use error::{RosterError, RosterResult};
pub use parser::read_roster;
pub use record::RosterRecord;
pub use slug::slugify;
