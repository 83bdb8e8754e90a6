//! Round results repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::rounds_sea as rounds_adapter;
use crate::errors::domain::DomainError;

/// A stored round result together with the team's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub round_number: i32,
    pub team_id: i64,
    pub team_name: String,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}

/// Data for writing one team's scored result
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResultData {
    pub round_number: i32,
    pub team_id: i64,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}

/// Insert or overwrite the result for `(round_number, team_id)`.
pub async fn upsert_result(
    txn: &DatabaseTransaction,
    data: RoundResultData,
) -> Result<u64, DomainError> {
    let dto = rounds_adapter::RoundUpsert {
        round_number: data.round_number,
        team_id: data.team_id,
        is_correct: data.is_correct,
        time_seconds: data.time_seconds,
        has_blitz: data.has_blitz,
        points: data.points,
    };
    Ok(rounds_adapter::upsert_result(txn, dto).await?)
}

/// All stored results, by round (asc) then points (desc).
pub async fn list_with_team_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<RoundRecord>, DomainError> {
    let rows = rounds_adapter::find_all_with_team_names(conn).await?;
    Ok(rows.into_iter().map(RoundRecord::from).collect())
}

impl From<rounds_adapter::RoundWithTeamRow> for RoundRecord {
    fn from(row: rounds_adapter::RoundWithTeamRow) -> Self {
        Self {
            round_number: row.round_number,
            team_id: row.team_id,
            team_name: row.team_name,
            is_correct: row.is_correct,
            time_seconds: row.time_seconds,
            has_blitz: row.has_blitz,
            points: row.points,
        }
    }
}
