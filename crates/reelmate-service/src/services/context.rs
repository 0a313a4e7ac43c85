//! Service context - dependency container for services
//!
//! Holds every repository, the media storage backend, the token service and
//! the id generator. Cloning is cheap; all members are shared.

use std::sync::Arc;

use reelmate_common::TokenService;
use reelmate_core::{
    AccountRepository, EngagementRepository, FoodPartner, FoodPostRepository, MediaStorage,
    Snowflake, SnowflakeGenerator, User,
};
use reelmate_db::{
    PgEngagementRepository, PgFoodPartnerRepository, PgFoodPostRepository, PgPool,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn AccountRepository<User>>,
    food_partner_repo: Arc<dyn AccountRepository<FoodPartner>>,
    food_post_repo: Arc<dyn FoodPostRepository>,
    engagement_repo: Arc<dyn EngagementRepository>,

    media_storage: Arc<dyn MediaStorage>,

    token_service: Arc<TokenService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Wire every PostgreSQL repository onto `pool`
    pub fn postgres(
        pool: PgPool,
        media_storage: Arc<dyn MediaStorage>,
        token_service: Arc<TokenService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            food_partner_repo: Arc::new(PgFoodPartnerRepository::new(pool.clone())),
            food_post_repo: Arc::new(PgFoodPostRepository::new(pool.clone())),
            engagement_repo: Arc::new(PgEngagementRepository::new(pool.clone())),
            pool,
            media_storage,
            token_service,
            snowflake_generator,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn AccountRepository<User> {
        self.user_repo.as_ref()
    }

    pub fn food_partner_repo(&self) -> &dyn AccountRepository<FoodPartner> {
        self.food_partner_repo.as_ref()
    }

    pub fn food_post_repo(&self) -> &dyn FoodPostRepository {
        self.food_post_repo.as_ref()
    }

    pub fn engagement_repo(&self) -> &dyn EngagementRepository {
        self.engagement_repo.as_ref()
    }

    pub fn media_storage(&self) -> &dyn MediaStorage {
        self.media_storage.as_ref()
    }

    // === Services ===

    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("token_service", &self.token_service)
            .finish_non_exhaustive()
    }
}

/// Builder for a ServiceContext with arbitrary repository implementations
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn AccountRepository<User>>>,
    food_partner_repo: Option<Arc<dyn AccountRepository<FoodPartner>>>,
    food_post_repo: Option<Arc<dyn FoodPostRepository>>,
    engagement_repo: Option<Arc<dyn EngagementRepository>>,
    media_storage: Option<Arc<dyn MediaStorage>>,
    token_service: Option<Arc<TokenService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn AccountRepository<User>>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn food_partner_repo(mut self, repo: Arc<dyn AccountRepository<FoodPartner>>) -> Self {
        self.food_partner_repo = Some(repo);
        self
    }

    pub fn food_post_repo(mut self, repo: Arc<dyn FoodPostRepository>) -> Self {
        self.food_post_repo = Some(repo);
        self
    }

    pub fn engagement_repo(mut self, repo: Arc<dyn EngagementRepository>) -> Self {
        self.engagement_repo = Some(repo);
        self
    }

    pub fn media_storage(mut self, storage: Arc<dyn MediaStorage>) -> Self {
        self.media_storage = Some(storage);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            food_partner_repo: required(self.food_partner_repo, "food_partner_repo")?,
            food_post_repo: required(self.food_post_repo, "food_post_repo")?,
            engagement_repo: required(self.engagement_repo, "engagement_repo")?,
            media_storage: required(self.media_storage, "media_storage")?,
            token_service: required(self.token_service, "token_service")?,
            snowflake_generator: self
                .snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::default())),
        })
    }
}
