//! Model → entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - [`EngagementTable`]: table and counter column for each engagement kind

mod engagement;
mod food_partner;
mod food_post;
mod user;

pub use engagement::EngagementTable;
