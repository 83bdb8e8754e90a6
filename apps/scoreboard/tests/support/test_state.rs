use scoreboard::config::db::DbProfile;
use scoreboard::infra::state::build_state;
use scoreboard::state::app_state::AppState;
use scoreboard::AppError;

/// Fresh state backed by its own in-memory SQLite database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::InMemory).build().await
}
