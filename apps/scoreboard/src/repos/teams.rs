//! Teams repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::teams_sea as teams_adapter;
use crate::errors::domain::DomainError;

/// A team and its aggregate score (sum of stored round points).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub id: i64,
    pub name: String,
    pub total_points: i64,
}

/// Every team with its total, ordered by total (desc) then name (asc).
pub async fn standings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<TeamStanding>, DomainError> {
    let rows = teams_adapter::find_totals(conn).await?;
    Ok(rows.into_iter().map(TeamStanding::from).collect())
}

impl From<teams_adapter::TeamTotalRow> for TeamStanding {
    fn from(row: teams_adapter::TeamTotalRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            total_points: row.total_points,
        }
    }
}
