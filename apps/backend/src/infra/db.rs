use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the SQLite store for the given profile.
///
/// The pool is pinned to a single connection: an in-memory database exists
/// per-connection, and SQLite serializes writers anyway.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1).sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))
}

/// Single entrypoint used by the state builder: connect, then bring the
/// schema up to date.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!("database ready");
    Ok(conn)
}
