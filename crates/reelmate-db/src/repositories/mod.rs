//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in reelmate-core.

mod engagement;
mod error;
mod food_partner;
mod food_post;
mod user;

pub use engagement::PgEngagementRepository;
pub use food_partner::PgFoodPartnerRepository;
pub use food_post::PgFoodPostRepository;
pub use user::PgUserRepository;
