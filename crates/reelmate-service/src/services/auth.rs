//! Authentication service
//!
//! Registration, login, access-token refresh, and resolving the principal
//! behind an access token. Every operation is generic over the principal kind
//! except registration, whose fields differ per kind.

use reelmate_common::{hash_password, verify_password, TokenPair};
use reelmate_core::{Account, DomainError, FoodPartner, Role, Snowflake, User};
use tracing::{info, instrument, warn};

use crate::dto::{normalize_email, LoginRequest, RegisterFoodPartnerRequest, RegisterUserRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::principal::Principal;

/// An authenticated principal together with its freshly issued tokens
#[derive(Debug, Clone)]
pub struct AuthOutcome<P> {
    pub principal: P,
    pub tokens: TokenPair,
}

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip_all)]
    pub async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> ServiceResult<AuthOutcome<User>> {
        let email = normalize_email(&request.email);
        let user = User::new(self.ctx.generate_id(), request.fullname, email);

        self.register(user, &request.password).await
    }

    #[instrument(skip_all)]
    pub async fn register_food_partner(
        &self,
        request: RegisterFoodPartnerRequest,
    ) -> ServiceResult<AuthOutcome<FoodPartner>> {
        let email = normalize_email(&request.email);
        let partner = FoodPartner::new(
            self.ctx.generate_id(),
            request.name,
            email,
        )
        .with_contact(request.phone, request.address, request.contact_name);

        self.register(partner, &request.password).await
    }

    async fn register<P: Principal>(
        &self,
        account: P,
        password: &str,
    ) -> ServiceResult<AuthOutcome<P>> {
        let repo = P::repository(self.ctx);

        // Fast path only; the unique constraint decides concurrent races
        if repo.email_exists(account.email()).await? {
            warn!(role = %P::ROLE, "Registration rejected: email already in use");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_off_executor(password.to_string()).await?;
        repo.create(&account, &password_hash).await?;

        info!(role = %P::ROLE, principal_id = %account.id(), "Account registered");

        let tokens = self.issue_tokens::<P>(account.id())?;
        Ok(AuthOutcome {
            principal: account,
            tokens,
        })
    }

    /// Verify email and password for one principal kind
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(self, request), fields(role = %P::ROLE))]
    pub async fn login<P: Principal>(&self, request: LoginRequest) -> ServiceResult<AuthOutcome<P>> {
        let repo = P::repository(self.ctx);
        let email = normalize_email(&request.email);

        let Some(account) = repo.find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(ServiceError::invalid_credentials());
        };

        let password_hash = repo.get_password_hash(account.id()).await?.ok_or_else(|| {
            warn!(principal_id = %account.id(), "Login failed: no password hash");
            ServiceError::invalid_credentials()
        })?;

        if !verify_off_executor(request.password, password_hash).await? {
            warn!(principal_id = %account.id(), "Login failed: invalid password");
            return Err(ServiceError::invalid_credentials());
        }

        info!(principal_id = %account.id(), "Logged in");

        let tokens = self.issue_tokens::<P>(account.id())?;
        Ok(AuthOutcome {
            principal: account,
            tokens,
        })
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is not rotated. The principal it names must
    /// still exist.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<String> {
        let claims = self
            .ctx
            .token_service()
            .validate_refresh_token(refresh_token)
            .map_err(|e| {
                warn!(error = %e, "Refresh rejected");
                ServiceError::unauthorized()
            })?;

        let principal_id = claims.principal_id()?;
        let exists = match claims.role {
            Role::User => self.find::<User>(principal_id).await?.is_some(),
            Role::FoodPartner => self.find::<FoodPartner>(principal_id).await?.is_some(),
        };

        if !exists {
            warn!(%principal_id, role = %claims.role, "Refresh rejected: principal no longer exists");
            return Err(ServiceError::unauthorized());
        }

        let access_token = self
            .ctx
            .token_service()
            .issue_access_token(principal_id, claims.role)?;

        info!(%principal_id, role = %claims.role, "Access token refreshed");
        Ok(access_token)
    }

    /// Resolve the principal behind an access token
    ///
    /// Fails with `Unauthorized` unless the token is a valid access token
    /// whose role matches `P` and whose subject still exists.
    #[instrument(skip_all, fields(role = %P::ROLE))]
    pub async fn authenticate<P: Principal>(&self, access_token: &str) -> ServiceResult<P> {
        let claims = self
            .ctx
            .token_service()
            .validate_access_token(access_token)
            .map_err(|e| {
                warn!(error = %e, "Access token rejected");
                ServiceError::unauthorized()
            })?;

        if claims.role != P::ROLE {
            warn!(token_role = %claims.role, "Access token rejected: wrong role");
            return Err(ServiceError::unauthorized());
        }

        let principal_id = claims.principal_id()?;
        self.find::<P>(principal_id).await?.ok_or_else(|| {
            warn!(%principal_id, "Access token rejected: principal no longer exists");
            ServiceError::unauthorized()
        })
    }

    async fn find<P: Principal>(&self, id: Snowflake) -> ServiceResult<Option<P>> {
        Ok(P::repository(self.ctx).find_by_id(id).await?)
    }

    fn issue_tokens<P: Principal>(&self, id: Snowflake) -> ServiceResult<TokenPair> {
        Ok(self.ctx.token_service().issue_token_pair(id, P::ROLE)?)
    }
}

// Argon2 is CPU bound for tens of milliseconds, so it runs on the blocking pool

async fn hash_off_executor(password: String) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServiceError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(Into::into)
}

async fn verify_off_executor(password: String, hash: String) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| ServiceError::internal(format!("Password verification task failed: {e}")))?
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;
    use reelmate_common::AppError;

    fn user_request(email: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            fullname: "Alice".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    fn partner_request(email: &str) -> RegisterFoodPartnerRequest {
        RegisterFoodPartnerRequest {
            name: "Taco Hut".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
            contact_name: Some("Ana".to_string()),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);

        let registered = auth.register_user(user_request("alice@example.com")).await.unwrap();
        assert_eq!(registered.principal.email, "alice@example.com");
        assert!(!registered.tokens.access_token.is_empty());

        let logged_in = auth
            .login::<User>(login("alice@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(logged_in.principal.id, registered.principal.id);
    }

    #[tokio::test]
    async fn test_email_is_normalized() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);

        auth.register_user(user_request("  Alice@Example.com ")).await.unwrap();
        let outcome = auth
            .login::<User>(login("ALICE@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(outcome.principal.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);

        auth.register_user(user_request("alice@example.com")).await.unwrap();
        let err = auth
            .register_user(user_request("alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::EmailAlreadyExists)));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_same_email_allowed_for_other_role() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);

        auth.register_user(user_request("shared@example.com")).await.unwrap();
        let partner = auth
            .register_food_partner(partner_request("shared@example.com"))
            .await
            .unwrap();
        assert_eq!(partner.principal.contact_name.as_deref(), Some("Ana"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_password_work_leaves_executor_free() {
        use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
        use std::sync::Arc;

        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);

        let ticks = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(AtomicBool::new(false));
        let ticker = tokio::spawn({
            let (ticks, done) = (ticks.clone(), done.clone());
            async move {
                while !done.load(Ordering::Relaxed) {
                    ticks.fetch_add(1, Ordering::Relaxed);
                    tokio::task::yield_now().await;
                }
            }
        });

        auth.register_user(user_request("alice@example.com")).await.unwrap();
        let after_register = ticks.load(Ordering::Relaxed);
        auth.login::<User>(login("alice@example.com", "secret")).await.unwrap();
        let after_login = ticks.load(Ordering::Relaxed);

        done.store(true, Ordering::Relaxed);
        ticker.await.unwrap();

        // On a single-threaded runtime the ticker only advances while hashing
        // and verification are parked on the blocking pool
        assert!(after_register > 0);
        assert!(after_login > after_register);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_auth_logs_omit_email() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer({
                let logs = logs.clone();
                move || logs.clone()
            })
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        auth.register_user(user_request("alice@example.com")).await.unwrap();
        auth.register_food_partner(partner_request("kitchen@example.com"))
            .await
            .unwrap();
        auth.login::<User>(login("alice@example.com", "secret")).await.unwrap();
        auth.login::<User>(login("alice@example.com", "wrong"))
            .await
            .unwrap_err();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Account registered"));
        assert!(output.contains("Login failed"));
        assert!(!output.contains("alice@example.com"));
        assert!(!output.contains("kitchen@example.com"));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        auth.register_user(user_request("alice@example.com")).await.unwrap();

        let unknown = auth
            .login::<User>(login("bob@example.com", "secret"))
            .await
            .unwrap_err();
        let wrong = auth
            .login::<User>(login("alice@example.com", "wrong"))
            .await
            .unwrap_err();

        for err in [unknown, wrong] {
            assert!(matches!(err, ServiceError::App(AppError::InvalidCredentials)));
        }
    }

    #[tokio::test]
    async fn test_login_is_scoped_to_role() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        auth.register_user(user_request("alice@example.com")).await.unwrap();

        let err = auth
            .login::<FoodPartner>(login("alice@example.com", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_checks_role() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let outcome = auth.register_user(user_request("alice@example.com")).await.unwrap();
        let token = outcome.tokens.access_token;

        let user = auth.authenticate::<User>(&token).await.unwrap();
        assert_eq!(user.id, outcome.principal.id);

        let err = auth.authenticate::<FoodPartner>(&token).await.unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_refresh_token() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let outcome = auth.register_user(user_request("alice@example.com")).await.unwrap();

        let err = auth
            .authenticate::<User>(&outcome.tokens.refresh_token)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_principal() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let token = test
            .ctx
            .token_service()
            .issue_access_token(Snowflake::new(404), Role::User)
            .unwrap();

        let err = auth.authenticate::<User>(&token).await.unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_refresh_issues_access_token_for_same_principal() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let outcome = auth
            .register_food_partner(partner_request("p@example.com"))
            .await
            .unwrap();

        let access = auth.refresh(&outcome.tokens.refresh_token).await.unwrap();
        let partner = auth.authenticate::<FoodPartner>(&access).await.unwrap();
        assert_eq!(partner.id, outcome.principal.id);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token_and_garbage() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let outcome = auth.register_user(user_request("alice@example.com")).await.unwrap();

        assert_eq!(
            auth.refresh(&outcome.tokens.access_token).await.unwrap_err().status_code(),
            401
        );
        assert_eq!(auth.refresh("garbage").await.unwrap_err().status_code(), 401);
    }

    #[tokio::test]
    async fn test_refresh_for_vanished_principal() {
        let test = TestContext::new();
        let auth = AuthService::new(&test.ctx);
        let token = test
            .ctx
            .token_service()
            .issue_refresh_token(Snowflake::new(404), Role::FoodPartner)
            .unwrap();

        assert_eq!(auth.refresh(&token).await.unwrap_err().status_code(), 401);
    }
}
