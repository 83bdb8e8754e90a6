//! Adapters for external dependencies.

pub mod rounds_sea;
pub mod teams_sea;
