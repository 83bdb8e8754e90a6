//! Table setup for throwaway databases and a presence check for real ones.
//!
//! Provisioned databases are managed outside this service; nothing here
//! alters an existing table.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema};
use tracing::warn;

use crate::entities::{rounds, teams};

/// Create `teams` and `rounds` from the entity definitions if absent.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema
            .create_table_from_entity(teams::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(rounds::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in statements {
        db.execute(backend.build(&stmt)).await?;
    }
    Ok(())
}

/// Warn (without failing start-up) when either table cannot be queried.
pub async fn check_tables(db: &DatabaseConnection) {
    if let Err(e) = teams::Entity::find().count(db).await {
        warn!(table = "teams", error = %e, "scoreboard table not readable");
    }
    if let Err(e) = rounds::Entity::find().count(db).await {
        warn!(table = "rounds", error = %e, "scoreboard table not readable");
    }
}
