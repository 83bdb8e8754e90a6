use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One team's result in one round. `(round_number, team_id)` is the key, so
/// a round can hold at most one row per team.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub round_number: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i64,
    pub is_correct: bool,
    #[sea_orm(column_type = "Double")]
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
