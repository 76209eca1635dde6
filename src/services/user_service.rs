//! User directory service.
//!
//! Owns user CRUD and the uniqueness invariants on email and phone.
//! Existence checks made here are advisory pre-checks; the store's unique
//! constraints remain the authoritative guard under concurrent writes.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, Password, User, UserPatch, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{NewUserRecord, UserRepository};

/// User directory trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// List users, optionally restricted to one role.
    ///
    /// The filter string is resolved case-insensitively against the closed
    /// role set; an unrecognized value fails with `InvalidArgument`.
    async fn find_all(&self, role_filter: Option<&str>) -> AppResult<Vec<User>>;

    /// Delete a user by ID. Deleting an absent id succeeds (idempotent).
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;

    /// Create a user with the role assigned by the calling route.
    ///
    /// Fails `DuplicateEmail` when the email is taken. The route choosing
    /// `role` is the sole authority for privilege assignment; request
    /// content never carries a role.
    async fn register(&self, request: NewUser, role: UserRole) -> AppResult<User>;

    /// Apply a sparse patch to a user.
    ///
    /// Fails `NotFound` for an unknown id. A changed email or phone is
    /// re-validated directory-wide before overwrite; a new password is
    /// re-hashed; absent fields are left untouched.
    async fn update(&self, patch: UserPatch, id: Uuid) -> AppResult<User>;
}

/// Concrete implementation of UserService over the user store
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new directory instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_all(&self, role_filter: Option<&str>) -> AppResult<Vec<User>> {
        match role_filter.filter(|s| !s.is_empty()) {
            Some(raw) => {
                let role: UserRole = raw.parse()?;
                self.users.list_by_role(role).await
            }
            None => self.users.list().await,
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.users.delete_by_id(id).await
    }

    async fn register(&self, request: NewUser, role: UserRole) -> AppResult<User> {
        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::DuplicateEmail);
        }

        // Phone uniqueness is only re-validated on update; at registration
        // the column's unique constraint is the single guard.
        let password_hash = Password::new(&request.password)?.into_string();

        self.users
            .insert(NewUserRecord {
                email: request.email,
                password_hash,
                name: request.name,
                phone: request.phone.filter(|p| !p.is_empty()),
                role,
            })
            .await
    }

    async fn update(&self, patch: UserPatch, id: Uuid) -> AppResult<User> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if let Some(email) = non_empty(patch.email) {
            if email != user.email {
                if self.users.exists_by_email(&email).await? {
                    return Err(AppError::DuplicateEmail);
                }
                user.email = email;
            }
        }

        if let Some(phone) = non_empty(patch.phone) {
            if user.phone.as_deref() != Some(phone.as_str()) {
                if self.users.exists_by_phone(&phone).await? {
                    return Err(AppError::DuplicatePhone);
                }
                user.phone = Some(phone);
            }
        }

        if let Some(name) = non_empty(patch.name) {
            user.name = name;
        }

        if let Some(password) = non_empty(patch.password) {
            user.password_hash = Password::new(&password)?.into_string();
        }

        if let Some(role) = patch.role {
            user.role = role;
        }

        self.users.save(user).await
    }
}

/// A present-but-empty string field is treated as absent
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
