//! Database models - SQLx-compatible structs for PostgreSQL tables

mod food_partner;
mod food_post;
mod user;

pub use food_partner::FoodPartnerModel;
pub use food_post::FoodPostModel;
pub use user::UserModel;
