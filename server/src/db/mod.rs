//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to open the shared SQLite pool and enforce schema
//! migrations before accepting API traffic. Foreign keys are enforced on every
//! connection so membership rows follow their user or conversation on delete.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open the SQLite pool (creating the file if needed) and run migrations.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the connection fails, or a
/// migration fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Apply pending migrations from `src/db/migrations`.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("src/db/migrations").run(pool).await?;
    Ok(())
}

/// Round-trip a trivial query; used by the liveness probe.
///
/// # Errors
///
/// Returns an error if the database does not answer.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
