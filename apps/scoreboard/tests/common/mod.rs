#![allow(dead_code)]

// tests/common/mod.rs
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    scoreboard_test_support::logging::init();
}

/// Proptest settings shared by property suites.
///
/// `PROPTEST_CASES` overrides the case count (default 64).
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}

/// Look up a team's entry in a scoreboard response by id.
pub fn team_entry(json: &Value, team_id: i64) -> &Value {
    json["teams"]
        .as_array()
        .expect("teams should be an array")
        .iter()
        .find(|t| t["id"] == team_id)
        .unwrap_or_else(|| panic!("team {team_id} missing from scoreboard"))
}
