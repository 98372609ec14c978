//! API Middleware
//!
//! Authentication, authorization and request tracing for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{require_admin, AdminUser, AuthenticatedUser, JwtAuth};
pub use request_id::{request_id_middleware, RequestId};
