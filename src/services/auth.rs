//! Credential registration and verification, token issuance.

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::{self, password, Claims};
use crate::config::SecurityConfig;
use crate::database::models::User;
use crate::database::{NewUser, UserStore};
use crate::error::ApiError;
use crate::validate;

pub struct AuthService {
    users: Arc<dyn UserStore>,
    security: SecurityConfig,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, security: SecurityConfig) -> Self {
        Self { users, security }
    }

    /// Create a user and issue a token for it.
    ///
    /// Validation reports only the first violated field; any storage or
    /// hashing failure surfaces as the registration-specific 500 message.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let mut errors = validate::registration_errors(name, email, password);
        if !errors.is_empty() {
            return Err(ApiError::ValidationFirst(errors.remove(0)));
        }

        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| ApiError::internal("Registration failed", e.into()))?;
        if existing.is_some() {
            return Err(ApiError::conflict("User with this email already exists"));
        }

        let password_hash = password::hash_password(password)
            .map_err(|e| ApiError::internal("Registration failed", e.into()))?;

        let user = self
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| ApiError::internal("Registration failed", e.into()))?;

        tracing::info!(user_id = %user.id, "registered user");
        self.issue_token(user.id)
            .map_err(|e| ApiError::internal("Registration failed", e))
    }

    /// Verify credentials and issue a token. Unknown email and wrong
    /// password produce the same error, so a caller cannot probe which
    /// accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let errors = validate::login_errors(email, password);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(ApiError::InvalidCredentials);
        };

        let matches = password::verify_password(password, &user.password_hash)
            .map_err(|e| ApiError::internal("Internal server error", e.into()))?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        self.issue_token(user.id)
            .map_err(|e| ApiError::internal("Internal server error", e))
    }

    /// Resolve the authenticated caller back to its user record.
    pub async fn who_am_i(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::not_found("User not found"))
    }

    fn issue_token(&self, user_id: Uuid) -> Result<String, anyhow::Error> {
        let claims = Claims::new(user_id, self.security.jwt_expiry_hours);
        Ok(auth::generate_jwt(&self.security.jwt_secret, claims)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::InMemoryUserStore;

    fn service(store: Arc<InMemoryUserStore>) -> AuthService {
        AuthService::new(
            store,
            SecurityConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_expiry_hours: 24,
            },
        )
    }

    #[tokio::test]
    async fn register_then_login() {
        let store = Arc::new(InMemoryUserStore::new());
        let svc = service(store.clone());

        svc.register("Alice", "alice@example.com", "secret")
            .await
            .unwrap();
        assert_eq!(store.len().await, 1);

        let token = svc.login("alice@example.com", "secret").await.unwrap();
        let claims = auth::verify_jwt("test-secret", &token).unwrap();

        let user = svc.who_am_i(claims.user.id).await.unwrap();
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn register_rejects_first_invalid_field_only() {
        let svc = service(Arc::new(InMemoryUserStore::new()));

        let err = svc.register("ab", "bad-email", "1234").await.unwrap_err();
        match err {
            ApiError::ValidationFirst(field) => assert_eq!(field.field, "name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let store = Arc::new(InMemoryUserStore::new());
        let svc = service(store.clone());

        svc.register("Alice", "alice@example.com", "secret")
            .await
            .unwrap();
        let err = svc
            .register("Alice Again", "alice@example.com", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let svc = service(Arc::new(InMemoryUserStore::new()));
        svc.register("Alice", "alice@example.com", "secret")
            .await
            .unwrap();

        let wrong_password = svc
            .login("alice@example.com", "wrong-password")
            .await
            .unwrap_err();
        let unknown_email = svc.login("bob@example.com", "whatever").await.unwrap_err();

        assert_eq!(wrong_password.to_json(), unknown_email.to_json());
    }
}
