//! Process configuration, resolved once at start-up and immutable afterwards.

pub mod db;

use std::env;

use crate::error::AppError;
use db::DbProfile;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Everything the binary needs from its environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DbProfile,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the process environment:
    /// - `DATABASE_URL` (required)
    /// - `SCOREBOARD_HOST` (default `0.0.0.0`)
    /// - `SCOREBOARD_PORT` (default `3001`)
    pub fn from_env() -> Result<Self, AppError> {
        let database = DbProfile::from_env()?;
        let host = env::var("SCOREBOARD_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("SCOREBOARD_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("SCOREBOARD_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database,
            host,
            port,
        })
    }
}
