//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates repository calls for one area of the domain.

pub mod auth;
pub mod context;
pub mod engagement;
pub mod error;
pub mod food;
pub mod food_partner;
pub mod principal;

pub use auth::{AuthOutcome, AuthService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use food::{FoodService, NewFoodPost};
pub use food_partner::{FoodPartnerProfile, FoodPartnerService};
pub use principal::Principal;
