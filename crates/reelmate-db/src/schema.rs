//! Schema bootstrap
//!
//! Every statement is `IF NOT EXISTS`, so running this on each startup is
//! safe against an already initialized database.

use sqlx::PgPool;
use tracing::info;

const SCHEMA: &str = include_str!("../sql/schema.sql");

/// Create all tables, constraints, and indexes that are missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
