#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Once;

use book_api::config::db::DbProfile;
use book_api::infra::db::bootstrap_db;
use book_api::state::app_state::AppState;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory SQLite database with migrations applied.
pub async fn test_db() -> DatabaseConnection {
    init_logging();
    bootstrap_db(DbProfile::Test)
        .await
        .expect("Failed to bootstrap test database")
}

/// AppState backed by a fresh in-memory database.
pub async fn test_state() -> AppState {
    AppState::new(test_db().await)
}
