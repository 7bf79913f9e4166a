//! Authentication service - registration, login, and token verification.
//!
//! Collaborators (user repository, JWT settings) are injected through the
//! constructor; password hashing lives in the domain `Password` value object.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication outcome returned after successful registration or login.
///
/// A projection of the user plus a signed token; the password hash never
/// appears here.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Account username
    #[schema(example = "alice")]
    pub username: String,
    /// Account email
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Account role
    #[schema(example = "user")]
    pub role: String,
}

impl AuthResponse {
    fn new(token: String, user: User) -> Self {
        Self {
            token,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and issue a token
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<AuthResponse>;

    /// Verify credentials and issue a token
    async fn login(&self, username: String, password: String) -> AppResult<AuthResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, jwt_secret: String, jwt_expiration_hours: i64) -> Self {
        Self {
            users,
            jwt_secret,
            jwt_expiration_hours,
        }
    }

    fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Generate JWT token for a user
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt_expiration_hours);

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret_bytes()),
        )?;

        Ok(token)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<AuthResponse> {
        // Username uniqueness is checked strictly before email uniqueness, so
        // a request colliding on both reports the username collision.
        if self.users.exists_by_username(&username).await? {
            return Err(AppError::DuplicateUsername);
        }
        if self.users.exists_by_email(&email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.users.create(username, email, password_hash).await?;

        let token = self.generate_token(&user)?;
        Ok(AuthResponse::new(token, user))
    }

    async fn login(&self, username: String, password: String) -> AppResult<AuthResponse> {
        let candidate = self.users.find_by_username(&username).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid usernames.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &candidate {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Re-read after verification: the row can be deleted in between. The
        // distinct UserVanished variant keeps that case separable internally
        // even though it surfaces identically to InvalidCredentials.
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or(AppError::UserVanished)?;

        let token = self.generate_token(&user)?;
        Ok(AuthResponse::new(token, user))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::Sequence;

    const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn service(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), TEST_SECRET.to_string(), 24)
    }

    fn stored_user(username: &str, email: &str, password: &str) -> User {
        User::new(
            Uuid::new_v4(),
            username.to_string(),
            email.to_string(),
            Password::new(password).unwrap().into_string(),
        )
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username_before_checking_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .withf(|u| u == "alice")
            .returning(|_| Ok(true));
        // No email expectation: reaching exists_by_email would panic the mock

        let result = service(repo)
            .register(
                "alice".to_string(),
                "a@x.com".to_string(),
                "pw".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DuplicateUsername));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_email()
            .withf(|e| e == "a@x.com")
            .returning(|_| Ok(true));

        let result = service(repo)
            .register(
                "alice".to_string(),
                "a@x.com".to_string(),
                "pw".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn register_persists_a_hashed_password_and_issues_a_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_create()
            .withf(|_, _, hash| {
                // The plaintext never reaches the store
                hash != "pw" && Password::from_hash(hash.to_string()).verify("pw")
            })
            .returning(|username, email, hash| Ok(User::new(Uuid::new_v4(), username, email, hash)));

        let svc = service(repo);
        let outcome = svc
            .register(
                "alice".to_string(),
                "a@x.com".to_string(),
                "pw".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(outcome.username, "alice");
        assert_eq!(outcome.email, "a@x.com");
        assert_eq!(outcome.role, "user");

        let claims = svc.verify_token(&outcome.token).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let user = stored_user("alice", "a@x.com", "correct");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(repo)
            .login("alice".to_string(), "wrong".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_unknown_username_is_invalid_credentials() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let result = service(repo)
            .login("ghost".to_string(), "pw".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_reports_a_vanished_user_distinctly() {
        let user = stored_user("alice", "a@x.com", "pw");
        let mut repo = MockUserRepository::new();
        let mut seq = Sequence::new();
        repo.expect_find_by_username()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(user.clone())));
        // Row deleted between credential verification and the re-read
        repo.expect_find_by_username()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let result = service(repo)
            .login("alice".to_string(), "pw".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::UserVanished));
    }

    #[tokio::test]
    async fn login_success_returns_matching_projection() {
        let user = stored_user("alice", "a@x.com", "pw");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .times(2)
            .returning(move |_| Ok(Some(user.clone())));

        let svc = service(repo);
        let outcome = svc
            .login("alice".to_string(), "pw".to_string())
            .await
            .unwrap();

        assert_eq!(outcome.username, "alice");
        assert_eq!(outcome.email, "a@x.com");

        let claims = svc.verify_token(&outcome.token).unwrap();
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn verify_token_rejects_garbage() {
        let repo = MockUserRepository::new();
        let result = service(repo).verify_token("not-a-jwt");
        assert!(matches!(result.unwrap_err(), AppError::Jwt(_)));
    }
}
