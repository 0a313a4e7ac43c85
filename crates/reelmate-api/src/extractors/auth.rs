//! Authentication extractor
//!
//! Reads the access token from the `Authorization: Bearer` header and
//! resolves it to a principal of one kind.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use reelmate_core::{FoodPartner, User};
use reelmate_service::{AuthService, Principal};

use crate::response::ApiError;
use crate::state::AppState;

/// The principal behind a valid access token
///
/// Rejects with 401 when the header is missing, the token does not verify,
/// its role is not `P`'s role, or the principal no longer exists.
#[derive(Debug, Clone)]
pub struct Authenticated<P>(pub P);

/// Authenticated end user
pub type AuthUser = Authenticated<User>;

/// Authenticated food partner
pub type AuthFoodPartner = Authenticated<FoodPartner>;

#[async_trait]
impl<S, P> FromRequestParts<S> for Authenticated<P>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    P: Principal,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let principal = AuthService::new(app_state.service_context())
            .authenticate::<P>(bearer.token())
            .await?;

        Ok(Self(principal))
    }
}
