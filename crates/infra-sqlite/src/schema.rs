// Schema Management - idempotent table creation

use crate::map_sqlx_error;
use hirewatch_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Create both tables if they do not exist yet.
///
/// Safe to call on every startup and again from the menu; existing tables
/// and their data are left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            employer_id INTEGER UNIQUE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(map_sqlx_error)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vacancies(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER REFERENCES companies(id),
            title TEXT NOT NULL,
            salary_min INTEGER,
            salary_max INTEGER,
            url TEXT,
            description TEXT,
            published TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(map_sqlx_error)?;

    info!("Schema ready");
    Ok(())
}

/// Check whether both tables already exist.
pub async fn tables_exist(pool: &SqlitePool) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('companies', 'vacancies')",
    )
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)?;

    Ok(count == 2)
}
