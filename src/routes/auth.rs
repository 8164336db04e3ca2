use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use crate::auth::{AuthService, AuthenticatedUser, LoginRequest};
use crate::error::AppError;
use crate::models::UserInput;

/// Register a new user
///
/// Creates an account and returns the user together with a bearer token.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    payload: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let session = auth.register(payload.into_inner())?;
    Ok(HttpResponse::Created().json(session))
}

/// Login
///
/// Authenticates by email and password and returns the user with a token.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let session = auth.login(payload.into_inner())?;
    Ok(HttpResponse::Ok().json(session))
}

/// Current user
///
/// Resolves the bearer token's subject to its current user record. Answers
/// 404 when the account was deleted after the token was issued.
#[get("/me")]
pub async fn me(
    auth: web::Data<AuthService>,
    identity: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user = auth.current_user(identity.id)?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}
