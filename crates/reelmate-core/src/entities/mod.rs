//! Domain entities - core business objects

mod account;
mod engagement;
mod food_partner;
mod food_post;
mod user;

pub use account::{Account, Role};
pub use engagement::{EngagementKind, ToggleOutcome, ToggleResult};
pub use food_partner::FoodPartner;
pub use food_post::FoodPost;
pub use user::User;
