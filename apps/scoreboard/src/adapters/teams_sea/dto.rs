//! DTOs for teams_sea adapter.

use sea_orm::FromQueryResult;

/// Row of the team totals query.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct TeamTotalRow {
    pub id: i64,
    pub name: String,
    pub total_points: i64,
}
