/*
 * Responsibility
 * - axum wiring for the auth gate
 *   - access: Authorization header → Authenticator → AuthUser in extensions
 *   - role: AuthUser in extensions → Authorizer (allow-list per route group)
 *
 * Order matters: apply `role` first, then `access`, so authentication runs
 * before the role check (the last applied layer is the outermost).
 */
pub mod access;
pub mod role;

use std::sync::Arc;

use axum::Router;

use crate::services::auth::{Authenticator, Authorizer};

/// Route group that requires a valid bearer token.
pub fn protected<S>(router: Router<S>, authenticator: Arc<Authenticator>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    access::apply(router, authenticator)
}

/// Route group that requires a valid bearer token and one of the allowed roles.
pub fn role_gated<S>(
    router: Router<S>,
    authenticator: Arc<Authenticator>,
    authorizer: Arc<Authorizer>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    access::apply(role::apply(router, authorizer), authenticator)
}
