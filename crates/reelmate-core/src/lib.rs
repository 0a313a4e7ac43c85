//! # reelmate-core
//!
//! Domain layer: account entities for both principal kinds, food posts,
//! engagement edges, repository traits, and the media storage port.
//! This crate has no dependency on the database or the web framework.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Account, EngagementKind, FoodPartner, FoodPost, Role, ToggleOutcome, ToggleResult, User,
};
pub use error::DomainError;
pub use traits::{
    AccountRepository, EngagementRepository, FoodPostRepository, MediaStorage, RepoResult,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
