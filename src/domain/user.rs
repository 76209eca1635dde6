//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::errors::AppError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Storage representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => ROLE_USER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

/// Strict parse: the filter parameter accepts arbitrary text but must
/// resolve into the closed variant set. Matching is case-insensitive,
/// never partial.
impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ROLE_USER) {
            Ok(UserRole::User)
        } else if s.eq_ignore_ascii_case(ROLE_ADMIN) {
            Ok(UserRole::Admin)
        } else {
            Err(AppError::invalid_argument(format!(
                "Unknown role: {}",
                s
            )))
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Drop the password hash before handing the entity outward
    pub fn without_password(mut self) -> Self {
        self.password_hash = String::new();
        self
    }
}

/// Registration data accepted by the directory.
///
/// The role is intentionally absent here: it is assigned by the calling
/// route, never taken from request content.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

/// Sparse update payload: each field is independently present or absent.
///
/// An absent field leaves the stored value untouched. This is an explicit
/// optional-field structure rather than the full entity shape, so "leave
/// unchanged" and "set to empty" cannot be confused.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserPatch {
    /// New email address (re-validated for uniqueness)
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "new@library.org")]
    pub email: Option<String>,
    /// New phone number (re-validated for uniqueness)
    #[schema(example = "08198765432")]
    pub phone: Option<String>,
    /// New display name
    #[schema(example = "Jane R.")]
    pub name: Option<String>,
    /// New password (re-hashed before storage)
    pub password: Option<String>,
    /// New role
    pub role: Option<UserRole>,
}

impl UserPatch {
    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.name.is_none()
            && self.password.is_none()
            && self.role.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "reader@library.org")]
    pub email: String,
    /// User display name
    #[schema(example = "Jane Reader")]
    pub name: String,
    /// User role
    #[schema(example = "USER")]
    pub role: UserRole,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("User").unwrap(), UserRole::User);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = UserRole::from_str("librarian").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn partial_match_is_rejected() {
        assert!(UserRole::from_str("adm").is_err());
        assert!(UserRole::from_str("users").is_err());
    }

    #[test]
    fn serialized_user_never_carries_password() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "secret-hash".to_string(),
            name: "A".to_string(),
            role: UserRole::User,
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }
}
