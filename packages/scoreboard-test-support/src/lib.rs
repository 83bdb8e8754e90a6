//! Scoreboard test support utilities
//!
//! Shared by the scoreboard integration tests: one-time logging setup and
//! assertions on the JSON error contract. Nothing here depends on the
//! scoreboard crate itself.

pub mod error_body;
pub mod logging;
