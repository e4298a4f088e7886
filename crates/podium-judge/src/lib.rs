//! HTTP clients for the contest service.
//!
//! Two channels exist side by side:
//!
//! - [`client::JudgeClient`] speaks the structured REST API (basic auth) and
//!   covers listing and creating organizations, teams, and users.
//! - [`jury::JuryClient`] speaks the session-authenticated jury web
//!   interface, which is the only channel that can set a user's password,
//!   role, and team binding.

pub mod client;
pub mod error;
pub mod jury;
pub mod models;

pub use client::JudgeClient;
pub use error::{JudgeClientError, JudgeClientResult};
pub use jury::JuryClient;
