//! Principal kinds known to the service layer

use reelmate_core::{Account, AccountRepository, FoodPartner, User};

use super::context::ServiceContext;

/// An account kind that can log in and be resolved from a session token
///
/// Login, refresh and per-route authentication are written once against this
/// trait and instantiated for [`User`] and [`FoodPartner`].
pub trait Principal: Account {
    /// Credential store holding accounts of this kind
    fn repository(ctx: &ServiceContext) -> &dyn AccountRepository<Self>;
}

impl Principal for User {
    fn repository(ctx: &ServiceContext) -> &dyn AccountRepository<Self> {
        ctx.user_repo()
    }
}

impl Principal for FoodPartner {
    fn repository(ctx: &ServiceContext) -> &dyn AccountRepository<Self> {
        ctx.food_partner_repo()
    }
}
