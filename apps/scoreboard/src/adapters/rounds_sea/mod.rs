//! SeaORM adapter for rounds repository.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

use crate::entities::{rounds, teams};

pub mod dto;

pub use dto::{RoundUpsert, RoundWithTeamRow};

/// Insert a team's result for a round, or overwrite the existing one.
///
/// Keyed by `(round_number, team_id)`; on conflict every scored column is
/// replaced. Returns the number of rows affected.
pub async fn upsert_result(
    txn: &DatabaseTransaction,
    dto: RoundUpsert,
) -> Result<u64, sea_orm::DbErr> {
    let row = rounds::ActiveModel {
        round_number: Set(dto.round_number),
        team_id: Set(dto.team_id),
        is_correct: Set(dto.is_correct),
        time_seconds: Set(dto.time_seconds),
        has_blitz: Set(dto.has_blitz),
        points: Set(dto.points),
    };

    rounds::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([rounds::Column::RoundNumber, rounds::Column::TeamId])
                .update_columns([
                    rounds::Column::IsCorrect,
                    rounds::Column::TimeSeconds,
                    rounds::Column::HasBlitz,
                    rounds::Column::Points,
                ])
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await
}

/// All recorded results with their team's name, by round and then by
/// points (highest first). Team id breaks remaining ties.
pub async fn find_all_with_team_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<RoundWithTeamRow>, sea_orm::DbErr> {
    rounds::Entity::find()
        .select_only()
        .columns([
            rounds::Column::RoundNumber,
            rounds::Column::TeamId,
            rounds::Column::IsCorrect,
            rounds::Column::TimeSeconds,
            rounds::Column::HasBlitz,
            rounds::Column::Points,
        ])
        .column_as(teams::Column::Name, "team_name")
        .join(JoinType::InnerJoin, rounds::Relation::Team.def())
        .order_by_asc(rounds::Column::RoundNumber)
        .order_by_desc(rounds::Column::Points)
        .order_by_asc(rounds::Column::TeamId)
        .into_model::<RoundWithTeamRow>()
        .all(conn)
        .await
}
