use scoreboard::entities::{rounds, teams};
use scoreboard::state::app_state::AppState;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

fn db(state: &AppState) -> &sea_orm::DatabaseConnection {
    state.db().expect("test state should have a database")
}

/// Insert a team with a fixed id.
pub async fn seed_team(state: &AppState, id: i64, name: &str) {
    teams::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
    }
    .insert(db(state))
    .await
    .expect("seed team");
}

/// Insert several teams at once.
pub async fn seed_teams(state: &AppState, entries: &[(i64, &str)]) {
    for (id, name) in entries {
        seed_team(state, *id, name).await;
    }
}

pub async fn count_rounds(state: &AppState) -> u64 {
    rounds::Entity::find()
        .count(db(state))
        .await
        .expect("count rounds")
}

pub async fn find_round(state: &AppState, round_number: i32, team_id: i64) -> Option<rounds::Model> {
    rounds::Entity::find_by_id((round_number, team_id))
        .one(db(state))
        .await
        .expect("find round")
}
