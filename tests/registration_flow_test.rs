//! End-to-end flows over an in-memory store.
//!
//! The fake repository below emulates the relational store including its
//! unique constraints, so the directory and auth services can be driven
//! together through full register/login/update/delete sequences.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use digilib::domain::{NewUser, User, UserPatch, UserRole};
use digilib::errors::{AppError, AppResult};
use digilib::infra::{NewUserRecord, UserRepository};
use digilib::services::{AuthService, Authenticator, UserDirectory, UserService};

/// In-memory user table enforcing the same unique constraints as the
/// relational store
#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn exists_by_phone(&self, phone: &str) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.phone.as_deref() == Some(phone)))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: NewUserRecord) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        // Unique constraints fire even when the advisory pre-check passed
        if rows.iter().any(|u| u.email == record.email) {
            return Err(AppError::DuplicateEmail);
        }
        if let Some(phone) = record.phone.as_deref() {
            if rows.iter().any(|u| u.phone.as_deref() == Some(phone)) {
                return Err(AppError::DuplicatePhone);
            }
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: record.email,
            password_hash: record.password_hash,
            name: record.name,
            role: record.role,
            phone: record.phone,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

fn request(email: &str, password: &str, name: &str, phone: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
        phone: Some(phone.to_string()),
    }
}

fn services() -> (UserDirectory, Authenticator) {
    let store = Arc::new(InMemoryUsers::default());
    (
        UserDirectory::new(store.clone()),
        Authenticator::new(store),
    )
}

#[tokio::test]
async fn registered_email_resolves_to_the_new_id() {
    let (directory, _) = services();

    let created = directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();

    let fetched = directory.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.email, "a@x.com");
}

#[tokio::test]
async fn role_segregated_login_sequence() {
    // register -> wrong entry point -> right entry point -> duplicate
    let (directory, auth) = services();

    directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();

    let admin_attempt = auth.login_admin("a@x.com", "password1").await;
    assert!(matches!(admin_attempt.unwrap_err(), AppError::Unauthorized));

    let session = auth.login("a@x.com", "password1").await.unwrap();
    assert!(session.user.password_hash.is_empty());
    assert!(!session.token.is_empty());

    let duplicate = directory
        .register(request("a@x.com", "password2", "B", "222"), UserRole::User)
        .await;
    assert!(matches!(duplicate.unwrap_err(), AppError::DuplicateEmail));
}

#[tokio::test]
async fn find_all_tracks_live_registrations_exactly() {
    let (directory, _) = services();

    let a = directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();
    let b = directory
        .register(request("b@x.com", "password1", "B", "222"), UserRole::User)
        .await
        .unwrap();
    let c = directory
        .register(request("c@x.com", "password1", "C", "333"), UserRole::Admin)
        .await
        .unwrap();

    directory.delete_by_id(b.id).await.unwrap();
    // Deleting again is not an error
    directory.delete_by_id(b.id).await.unwrap();

    let live: HashSet<Uuid> = directory
        .find_all(None)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(live, HashSet::from([a.id, c.id]));
}

#[tokio::test]
async fn role_filter_splits_the_directory() {
    let (directory, _) = services();

    directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();
    directory
        .register(request("r@x.com", "password1", "R", "999"), UserRole::Admin)
        .await
        .unwrap();

    let admins = directory.find_all(Some("ADMIN")).await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "r@x.com");

    let users = directory.find_all(Some("user")).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
}

#[tokio::test]
async fn cross_user_patch_collisions_are_rejected() {
    let (directory, _) = services();

    directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();
    let b = directory
        .register(request("b@x.com", "password1", "B", "222"), UserRole::User)
        .await
        .unwrap();

    let email_patch = UserPatch {
        email: Some("a@x.com".to_string()),
        ..Default::default()
    };
    let result = directory.update(email_patch, b.id).await;
    assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail));

    let phone_patch = UserPatch {
        phone: Some("111".to_string()),
        ..Default::default()
    };
    let result = directory.update(phone_patch, b.id).await;
    assert!(matches!(result.unwrap_err(), AppError::DuplicatePhone));

    // The target record is unchanged after both failures
    let unchanged = directory.find_by_id(b.id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "b@x.com");
    assert_eq!(unchanged.phone.as_deref(), Some("222"));
}

#[tokio::test]
async fn password_change_takes_effect_on_next_login() {
    let (directory, auth) = services();

    let user = directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();

    let patch = UserPatch {
        password: Some("password2!".to_string()),
        ..Default::default()
    };
    directory.update(patch, user.id).await.unwrap();

    let stale = auth.login("a@x.com", "password1").await;
    assert!(matches!(stale.unwrap_err(), AppError::Unauthorized));

    assert!(auth.login("a@x.com", "password2!").await.is_ok());
}

#[tokio::test]
async fn racing_registration_is_stopped_by_the_store_constraint() {
    // Both callers pass the advisory pre-check before either inserts; the
    // store-level constraint must still reject the second write.
    let store = Arc::new(InMemoryUsers::default());
    let directory = UserDirectory::new(store.clone());

    directory
        .register(request("a@x.com", "password1", "A", "111"), UserRole::User)
        .await
        .unwrap();

    // Simulate the raced second insert arriving after the pre-check
    let raced = store
        .insert(NewUserRecord {
            email: "a@x.com".to_string(),
            password_hash: "other-hash".to_string(),
            name: "B".to_string(),
            phone: None,
            role: UserRole::User,
        })
        .await;

    assert!(matches!(raced.unwrap_err(), AppError::DuplicateEmail));
}
