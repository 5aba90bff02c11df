/*
 * Responsibility
 * - Diagnostic events emitted by the Authenticator / Authorizer
 * - AuthEventSink: injected at construction time (no global logger)
 *
 * Notes
 * - `record` returns nothing: a sink can lose events, it can never change the
 *   authentication / authorization outcome.
 */
use super::error::AuthError;
use super::identity::{AuthUser, RequestTarget};

#[derive(Debug, Clone, Copy)]
pub enum AuthEvent<'a> {
    Authenticated {
        user: &'a AuthUser,
        target: RequestTarget<'a>,
    },
    AuthenticationFailed {
        error: &'a AuthError,
        target: RequestTarget<'a>,
    },
    RoleCheckPassed {
        user: &'a AuthUser,
        required_roles: &'a [String],
        target: RequestTarget<'a>,
    },
    RoleCheckFailed {
        // None: no authenticated user in context (wiring defect)
        user: Option<&'a AuthUser>,
        required_roles: &'a [String],
        target: RequestTarget<'a>,
    },
}

pub trait AuthEventSink: Send + Sync {
    fn record(&self, event: &AuthEvent<'_>);
}

/// Default sink. Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AuthEventSink for NoopSink {
    fn record(&self, _event: &AuthEvent<'_>) {}
}

/// Forwards events to `tracing`. Successes at INFO, rejections at WARN.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuthEventSink for TracingSink {
    fn record(&self, event: &AuthEvent<'_>) {
        match *event {
            AuthEvent::Authenticated { user, target } => {
                tracing::info!(
                    user_id = user.id,
                    role = %user.role,
                    method = target.method,
                    path = target.path,
                    request_id = target.request_id,
                    "user authenticated"
                );
            }
            AuthEvent::AuthenticationFailed { error, target } => {
                let message = match error {
                    AuthError::MissingHeader => "missing authorization header",
                    AuthError::MissingToken => "empty token",
                    AuthError::InvalidFormat => "invalid authorization header format",
                    AuthError::InvalidToken(_) => "token validation failed",
                    AuthError::InvalidClaims(_) => "invalid token claims",
                    AuthError::Unauthorized | AuthError::InsufficientPermissions => {
                        "authentication failed"
                    }
                };
                // `error` chains to the jsonwebtoken cause for token failures.
                let cause = std::error::Error::source(error).map(|e| e.to_string());
                tracing::warn!(
                    cause = cause.as_deref(),
                    method = target.method,
                    path = target.path,
                    request_id = target.request_id,
                    "{message}"
                );
            }
            AuthEvent::RoleCheckPassed {
                user,
                required_roles,
                target,
            } => {
                tracing::info!(
                    user_id = user.id,
                    role = %user.role,
                    required_roles = ?required_roles,
                    path = target.path,
                    request_id = target.request_id,
                    "role check passed"
                );
            }
            AuthEvent::RoleCheckFailed {
                user: None,
                required_roles,
                target,
            } => {
                tracing::warn!(
                    required_roles = ?required_roles,
                    path = target.path,
                    request_id = target.request_id,
                    "role check failed: no authenticated user in context"
                );
            }
            AuthEvent::RoleCheckFailed {
                user: Some(user),
                required_roles,
                target,
            } => {
                tracing::warn!(
                    user_id = user.id,
                    user_role = %user.role,
                    required_roles = ?required_roles,
                    path = target.path,
                    request_id = target.request_id,
                    "role check failed: insufficient permissions"
                );
            }
        }
    }
}
