//! SeaORM adapter for teams repository.

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ConnectionTrait, EntityTrait, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{rounds, teams};

pub mod dto;

pub use dto::TeamTotalRow;

/// `COALESCE(SUM(rounds.points), 0)`: teams without rounds total zero.
fn total_points_expr() -> SimpleExpr {
    Func::coalesce([
        Expr::col((rounds::Entity, rounds::Column::Points)).sum(),
        Expr::val(0).into(),
    ])
    .into()
}

/// Every team with the sum of its stored points, best total first and
/// then by name.
pub async fn find_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<TeamTotalRow>, sea_orm::DbErr> {
    teams::Entity::find()
        .select_only()
        .column(teams::Column::Id)
        .column(teams::Column::Name)
        .column_as(total_points_expr(), "total_points")
        .join(JoinType::LeftJoin, teams::Relation::Rounds.def())
        .group_by(teams::Column::Id)
        .group_by(teams::Column::Name)
        .order_by_desc(total_points_expr())
        .order_by_asc(teams::Column::Name)
        .into_model::<TeamTotalRow>()
        .all(conn)
        .await
}
