//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{EngagementKind, FoodPost, ToggleResult};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Credential Store
// ============================================================================

/// Persistence for one principal kind (`User` or `FoodPartner`)
///
/// Email uniqueness is enforced per kind: `create` must fail with
/// `DomainError::EmailAlreadyExists` when the email is taken, even if
/// `email_exists` returned `false` a moment earlier.
#[async_trait]
pub trait AccountRepository<A>: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<A>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<A>>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    async fn create(&self, account: &A, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Food Post Repository
// ============================================================================

#[async_trait]
pub trait FoodPostRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<FoodPost>>;

    /// Every post, newest first
    async fn list_all(&self) -> RepoResult<Vec<FoodPost>>;

    /// Posts owned by one partner, newest first
    async fn find_by_partner(&self, food_partner_id: Snowflake) -> RepoResult<Vec<FoodPost>>;

    /// Posts whose id is in `ids`, newest first. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<FoodPost>>;

    async fn create(&self, post: &FoodPost) -> RepoResult<()>;
}

// ============================================================================
// Engagement Repository
// ============================================================================

#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Flip the edge for (user, food) and move the post's counter with it
    ///
    /// Implementations must apply the edge change and the counter delta as
    /// one atomic step, serialized against every other toggle on the same
    /// post. Fails with `DomainError::FoodPostNotFound` if the post is
    /// missing.
    async fn toggle(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
        food_id: Snowflake,
    ) -> RepoResult<ToggleResult>;

    async fn exists(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
        food_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Ids of the posts the user has an edge to, most recent edge first
    async fn find_food_ids_by_user(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>>;
}
