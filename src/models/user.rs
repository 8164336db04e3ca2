use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A registered user as held by the credential store.
///
/// The password hash never leaves the process: `serde` skips it on
/// serialization, so any response embedding a `User` is safe by construction.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lowercased; uniqueness is enforced on the lowercased form.
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user account.
///
/// The HTTP boundary validates this before the core is invoked, but the auth
/// service validates it again; the core never trusts the gate to have run.
#[derive(Debug, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 3, message = "Name must be at least 3 characters long"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}
