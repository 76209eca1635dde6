//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::map_unique_violation;
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};

/// Column values for a user row about to be created.
///
/// The password arrives here already hashed; the repository never sees
/// plain-text credentials.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Check whether any user holds the given email
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Check whether any user holds the given phone number
    async fn exists_by_phone(&self, phone: &str) -> AppResult<bool>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// List users holding the given role
    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Insert a new user row
    async fn insert(&self, record: NewUserRecord) -> AppResult<User>;

    /// Persist every column of an existing user
    async fn save(&self, user: User) -> AppResult<User>;

    /// Delete user by ID; deleting an absent row is not an error
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn exists_by_phone(&self, phone: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Phone.eq(phone))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Role.eq(role.as_str()))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn insert(&self, record: NewUserRecord) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            name: Set(record.name),
            role: Set(record.role.as_str().to_string()),
            phone: Set(record.phone),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // The unique constraints are the authoritative guard: a race past
        // the service-level existence check still fails here.
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(User::from(model))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let active = ActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            name: Set(user.name),
            role: Set(user.role.as_str().to_string()),
            phone: Set(user.phone),
            created_at: Set(user.created_at),
            updated_at: Set(chrono::Utc::now()),
        };

        let model = active.update(&self.db).await.map_err(map_unique_violation)?;
        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
