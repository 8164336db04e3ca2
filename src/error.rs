//!
//! # Application Error Handling
//!
//! This module defines the error type `AppError` used throughout the
//! application. Every failure a service can produce is recovered into one of
//! its variants before reaching the transport layer; no raw storage or
//! library errors cross a handler boundary.
//!
//! `AppError` implements `actix_web::error::ResponseError` so handlers can
//! return `Result<_, AppError>` and have failures rendered as JSON error
//! responses with the right status code. `From` implementations for
//! `validator::ValidationErrors`, `jsonwebtoken::errors::Error`, and
//! `bcrypt::BcryptError` keep the `?` operator usable on those paths.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all failure kinds the core services report.
///
/// Callers branch on the variant, never on message text. The messages are
/// user-facing and deliberately free of internal detail.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or out-of-range input reached a service (HTTP 400).
    Validation(String),
    /// Registration attempted with an email that is already taken (HTTP 400).
    DuplicateEmail(String),
    /// Login or identify failed. Unknown email and wrong password are
    /// deliberately indistinguishable (HTTP 401).
    InvalidCredentials(String),
    /// A bearer token was missing, malformed, forged, or expired (HTTP 401).
    InvalidToken(String),
    /// The requested resource does not exist or belongs to another user;
    /// the two cases are deliberately indistinguishable (HTTP 404).
    NotFound(String),
    /// Unclassified failure, surfaced generically (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DuplicateEmail(msg) => write!(f, "Duplicate Email: {}", msg),
            AppError::InvalidCredentials(msg) => write!(f, "Invalid Credentials: {}", msg),
            AppError::InvalidToken(msg) => write!(f, "Invalid Token: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This lets Actix Web translate `AppError` results from handlers into the
/// correct HTTP status codes and JSON bodies of the shape `{"error": msg}`.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::DuplicateEmail(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::InvalidCredentials(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::InvalidToken(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            // Internal detail stays in the logs, never in the response body.
            AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Something went wrong, please try again"
            })),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// JWT processing failures (bad signature, malformed token, expiry) all
/// surface as unauthenticated.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::InvalidToken(format!("Invalid token: {}", error))
    }
}

/// Password hashing or verification failures are internal, never a hint to
/// the caller about which credential was wrong.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
