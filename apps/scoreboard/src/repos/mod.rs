//! Repository functions for the domain layer.

pub mod rounds;
pub mod teams;
