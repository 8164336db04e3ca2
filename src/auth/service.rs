use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::auth::token::TokenService;
use crate::auth::{AuthResponse, LoginRequest};
use crate::error::AppError;
use crate::models::{User, UserInput};
use crate::store::UserStore;

/// Composes the credential store and the token service into the
/// register / login / identify flows.
///
/// The HTTP boundary validates payloads before they get here, but every
/// entry point re-validates; the service does not assume the gate ran.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Creates an account and signs the new user in.
    pub fn register(&self, input: UserInput) -> Result<AuthResponse, AppError> {
        input.validate()?;

        let user = self
            .users
            .create(&input.name, &input.email, &input.password)?;
        let token = self.tokens.issue(user.id, &user.name)?;

        log::info!("registered user {}", user.id);
        Ok(AuthResponse { user, token })
    }

    /// Authenticates by email and password.
    ///
    /// An unknown email and a wrong password fail with the same kind and the
    /// same message; a caller cannot probe which emails are registered. A
    /// malformed payload is a validation failure, not a credential one.
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)?
            .ok_or_else(|| AppError::InvalidCredentials("Invalid credentials".into()))?;

        if !self.users.verify_password(&user, &request.password)? {
            return Err(AppError::InvalidCredentials("Invalid credentials".into()));
        }

        let token = self.tokens.issue(user.id, &user.name)?;
        log::info!("user {} logged in", user.id);
        Ok(AuthResponse { user, token })
    }

    /// Verifies a bearer token and re-resolves the user it names.
    ///
    /// Resolving again catches the case where the account was deleted after
    /// the token was issued.
    pub fn identify(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;
        self.current_user(claims.sub)
    }

    /// Resolves an already-authenticated user id to its current record.
    pub fn current_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn auth_service() -> AuthService {
        AuthService::new(
            Arc::new(UserStore::new()),
            TokenService::new("test_secret", Duration::hours(24)),
        )
    }

    fn ada() -> UserInput {
        UserInput {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_then_identify() {
        let auth = auth_service();
        let session = auth.register(ada()).unwrap();

        let user = auth.identify(&session.token).unwrap();
        assert_eq!(user.id, session.user.id);
        assert_eq!(user.email, "ada@x.com");
    }

    #[test]
    fn test_register_rejects_invalid_shapes() {
        let auth = auth_service();

        let result = auth.register(UserInput {
            name: "Ad".to_string(),
            ..ada()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = auth.register(UserInput {
            password: "short".to_string(),
            ..ada()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_register_duplicate_email() {
        let auth = auth_service();
        auth.register(ada()).unwrap();

        let result = auth.register(UserInput {
            name: "Imposter".to_string(),
            email: "ADA@X.COM".to_string(),
            password: "other456".to_string(),
        });
        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let auth = auth_service();
        auth.register(ada()).unwrap();

        let wrong_password = auth
            .login(credentials("ada@x.com", "wrong_password"))
            .unwrap_err();
        let unknown_email = auth
            .login(credentials("nobody@x.com", "secret123"))
            .unwrap_err();

        match (&wrong_password, &unknown_email) {
            (AppError::InvalidCredentials(a), AppError::InvalidCredentials(b)) => {
                assert_eq!(a, b);
            }
            other => panic!("Expected matching InvalidCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_login_success_issues_usable_token() {
        let auth = auth_service();
        let registered = auth.register(ada()).unwrap();

        let session = auth.login(credentials("Ada@X.com", "secret123")).unwrap();
        assert_eq!(session.user.id, registered.user.id);
        assert_eq!(auth.identify(&session.token).unwrap().id, registered.user.id);
    }

    #[test]
    fn test_login_rejects_malformed_payloads() {
        let auth = auth_service();
        auth.register(ada()).unwrap();

        // A malformed email never reaches the credential check.
        let result = auth.login(credentials("not-an-email", "secret123"));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = auth.login(credentials("ada@x.com", ""));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_identify_after_user_deletion() {
        let users = Arc::new(UserStore::new());
        let auth = AuthService::new(
            Arc::clone(&users),
            TokenService::new("test_secret", Duration::hours(24)),
        );

        let session = auth.register(ada()).unwrap();
        users.delete_by_email("ada@x.com").unwrap();

        assert!(matches!(
            auth.identify(&session.token),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_identify_rejects_forged_token() {
        let auth = auth_service();
        assert!(matches!(
            auth.identify("forged.token.here"),
            Err(AppError::InvalidToken(_))
        ));
    }
}
