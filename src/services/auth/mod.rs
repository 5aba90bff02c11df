/*
 * Responsibility
 * - Bearer authentication (Authenticator) and role gate (Authorizer)
 * - Pure, synchronous checks. HTTP wiring lives in middleware::auth
 */
pub mod authenticator;
pub mod authorizer;
pub mod bearer;
pub mod error;
pub mod events;
pub mod factory;
pub mod identity;
pub mod token;

pub use authenticator::Authenticator;
pub use authorizer::Authorizer;
pub use error::{AuthError, AuthErrorKind};
pub use events::{AuthEvent, AuthEventSink, NoopSink, TracingSink};
pub use factory::{build_admin_authorizer, build_authenticator};
pub use identity::{AuthUser, RequestTarget};
pub use token::{TokenError, TokenVerifier};
