//! DTOs for rounds_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for writing one team's round result.
#[derive(Debug, Clone)]
pub struct RoundUpsert {
    pub round_number: i32,
    pub team_id: i64,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}

/// Row of the rounds listing joined with `teams.name`.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct RoundWithTeamRow {
    pub round_number: i32,
    pub team_id: i64,
    pub team_name: String,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}
