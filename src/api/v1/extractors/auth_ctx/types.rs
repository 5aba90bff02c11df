/*
 * Responsibility
 * - The "authenticated context" type handlers receive
 * - middleware verifies the token and stores AuthUser in request extensions;
 *   handlers only take this type
 *
 * Notes
 * - The extensions key is the `AuthUser` type itself (no string keys)
 */
use crate::services::auth::AuthUser;

/// Extractor for the identity attached by `middleware::auth::access`.
///
/// Missing identity → 401 UNAUTHORIZED (route not behind the access middleware).
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

impl std::ops::Deref for CurrentUser {
    type Target = AuthUser;

    fn deref(&self) -> &AuthUser {
        &self.0
    }
}
