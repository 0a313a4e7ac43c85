//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids, and the
//! multipart food post upload.

mod auth;
mod multipart;
mod path;
mod validated;

pub use auth::{AuthFoodPartner, AuthUser, Authenticated};
pub use multipart::FoodPostForm;
pub use path::SnowflakePath;
pub use validated::ValidatedJson;
