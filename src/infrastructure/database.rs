use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn init_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await?;

    tracing::debug!(max_connections, "database pool ready");
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Single-connection in-memory database with migrations applied.
///
/// Every `sqlite::memory:` connection is its own database, so the pool is
/// capped at one connection to keep all queries on the same data.
pub async fn in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = init_pool("sqlite::memory:", 1).await?;
    run_migrations(&pool)
        .await
        .map_err(|err| sqlx::Error::Migrate(Box::new(err)))?;
    Ok(pool)
}
