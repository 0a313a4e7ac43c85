//! # reelmate-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent schema bootstrap
//! - Row models with SQLx `FromRow` derives
//! - Row → entity mappers
//! - Repository implementations, including the transactional like/save toggle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reelmate_db::{create_pool, ensure_schema, PgUserRepository, PoolConfig};
//!
//! async fn example(config: &reelmate_common::AppConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     ensure_schema(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgEngagementRepository, PgFoodPartnerRepository, PgFoodPostRepository, PgUserRepository,
};
pub use schema::ensure_schema;
