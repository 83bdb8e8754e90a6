use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{sanitize_db_url, DbProfile};
use crate::error::AppError;
use crate::infra::schema;

/// Open a pool for the given profile. Does not touch the schema.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(profile.url().to_owned());
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));

    if matches!(profile, DbProfile::InMemory) {
        // every pooled connection would otherwise get its own empty database
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and make the schema usable.
///
/// The in-memory profile gets its tables created; any other profile is
/// expected to be provisioned already and is only checked.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    match profile {
        DbProfile::InMemory => schema::create_tables(&conn).await?,
        DbProfile::Url(_) => schema::check_tables(&conn).await,
    }

    info!(
        db_url = %sanitize_db_url(profile.url()),
        sqlite = profile.is_sqlite(),
        "database ready"
    );
    Ok(conn)
}
