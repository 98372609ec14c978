//! JWT Authentication and Admin Authorization
//!
//! `JwtAuth` extracts and validates the bearer token; `AdminUser` additionally
//! runs the `require_admin` guard so handlers only ever see staff or
//! superuser principals.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorResponse, UseCaseError};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            is_staff: claims.is_staff,
            is_superuser: claims.is_superuser,
        }
    }
}

/// Permission guard: only staff or superusers may manage the fleet
///
/// # Errors
///
/// Returns `UseCaseError::Forbidden` for any other principal.
pub fn require_admin(user: &AuthenticatedUser) -> Result<(), UseCaseError> {
    if user.is_admin() {
        Ok(())
    } else {
        tracing::warn!(user_id = %user.id, username = %user.username, "Non-admin access denied");
        Err(UseCaseError::Forbidden(
            "You do not have permission to perform this action.".to_string(),
        ))
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Admin-only extractor: authentication followed by `require_admin`
pub struct AdminUser(pub AuthenticatedUser);

/// Error type for authentication and authorization failures
#[derive(Debug)]
pub struct AuthError {
    status: StatusCode,
    message: String,
}

impl AuthError {
    fn unauthorized(message: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<UseCaseError> for AuthError {
    fn from(err: UseCaseError) -> Self {
        let status = err.status_code();
        let message = match err {
            UseCaseError::Forbidden(message) | UseCaseError::Unauthorized(message) => message,
            other => other.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let code = if self.status == StatusCode::FORBIDDEN {
            "FORBIDDEN"
        } else {
            "UNAUTHORIZED"
        };
        (self.status, Json(ErrorResponse::new(code, self.message, None))).into_response()
    }
}

/// Decode and validate a bearer token against the configured secret
///
/// # Errors
///
/// Returns an unauthorized `AuthError` if the token is malformed, has a bad
/// signature, or is expired.
pub fn authenticate(token: &str, secret: &str) -> Result<AuthenticatedUser, AuthError> {
    // Explicit algorithm to prevent algorithm confusion attacks
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 60;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        // Don't expose internal token validation details
        .map_err(|_| AuthError::unauthorized("Invalid or expired token"))?;

    Ok(token_data.claims.into())
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Config is injected by `add_config_extension`
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .cloned()
            .ok_or_else(|| AuthError::unauthorized("Configuration not available"))?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::unauthorized("Authentication credentials were not provided."))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::unauthorized("Invalid Authorization header format"))?;

        authenticate(token, &config.jwt.secret).map(JwtAuth)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let JwtAuth(user) = JwtAuth::from_request_parts(parts, state).await?;
        require_admin(&user)?;
        Ok(AdminUser(user))
    }
}

/// Middleware layer that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}
