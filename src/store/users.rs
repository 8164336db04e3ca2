//!
//! # Credential Store
//!
//! In-memory store for user records. Emails are normalized to lowercase on
//! the way in and uniqueness is enforced on the normalized form. Passwords
//! are bcrypt-hashed before they touch the map; the plaintext is never
//! retained.
//!
//! All state sits behind a single `RwLock`, so the duplicate-email check and
//! the insert happen under one write-lock acquisition. Two concurrent
//! registrations for the same email cannot both succeed.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;

#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::Internal("user store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::Internal("user store lock poisoned".into()))
    }

    /// Looks up a user by email, case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_lowercase();
        let users = self.read()?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.read()?;
        Ok(users.get(&id).cloned())
    }

    /// Creates a user, hashing the password and enforcing email uniqueness.
    ///
    /// The hash is computed before the lock is taken; the uniqueness check
    /// and insert then run under the write lock, so a concurrent create for
    /// the same email observes the winner and fails with `DuplicateEmail`.
    pub fn create(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.to_lowercase();
        let password_hash = hash_password(password)?;

        let mut users = self.write()?;
        if users.values().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail(
                "User with this email already exists".into(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());

        log::debug!("created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Checks a candidate password against the stored hash. Never compares
    /// plaintext.
    pub fn verify_password(&self, user: &User, candidate: &str) -> Result<bool, AppError> {
        verify_password(candidate, &user.password_hash)
    }

    /// Administrative removal; not reachable through the public API.
    pub fn delete_by_email(&self, email: &str) -> Result<(), AppError> {
        let email = email.to_lowercase();
        let mut users = self.write()?;
        users.retain(|_, u| u.email != email);
        Ok(())
    }
}
