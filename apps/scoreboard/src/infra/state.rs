use tracing::info;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_profile: None }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_profile {
            Some(profile) => {
                let conn = bootstrap_db(&profile).await?;
                Ok(AppState::new(conn))
            }
            None => {
                info!("building state without a database");
                Ok(AppState::new_without_db())
            }
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_in_memory_creates_schema() {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let state = build_state().with_db(DbProfile::InMemory).build().await.unwrap();
        let db = state.db().unwrap();

        assert_eq!(crate::entities::Teams::find().count(db).await.unwrap(), 0);
        assert_eq!(crate::entities::Rounds::find().count(db).await.unwrap(), 0);
    }
}
