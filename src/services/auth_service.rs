//! Authentication service.
//!
//! Validates credentials against the user directory and enforces
//! role-segregated login: the ordinary entry point rejects admin
//! accounts and the admin entry point rejects everyone else.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Outcome of a successful login: the authenticated user (password hash
/// cleared) and a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Ordinary login. Fails `NotFound` for an unknown email,
    /// `Unauthorized` for admin accounts or a bad password.
    async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Admin login. Mirror of `login`, requiring the admin role.
    async fn login_admin(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Produce an opaque, unguessable session token.
    ///
    /// Pure generation: the token is not persisted and carries no binding
    /// to `user`. A future session layer would record the association.
    fn issue_token(&self, user: &User) -> String;
}

/// Concrete implementation of AuthService over the user store
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        expect_admin: bool,
    ) -> AppResult<AuthSession> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::NotFound)?;

        // Role segregation happens before password verification: an
        // account on the wrong entry point is rejected outright.
        if user.is_admin() != expect_admin {
            return Err(AppError::Unauthorized);
        }

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(password) {
            return Err(AppError::Unauthorized);
        }

        let token = self.issue_token(&user);
        Ok(AuthSession {
            user: user.without_password(),
            token,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.authenticate(email, password, false).await
    }

    async fn login_admin(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.authenticate(email, password, true).await
    }

    fn issue_token(&self, _user: &User) -> String {
        Uuid::new_v4().to_string()
    }
}
