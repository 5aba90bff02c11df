/*
 * Responsibility
 * - Authenticated identity produced by the Authenticator
 * - Request metadata (method / path / request id) used for diagnostics
 *
 * Notes
 * - AuthUser lives only inside a single request's extensions.
 *   It is never persisted and never re-validated downstream.
 */
use serde::Serialize;

/// Identity extracted from a verified access token.
///
/// - `id` is the `user_id` claim
/// - `role` is compared verbatim against route-group allow-lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: i32,
    pub role: String,
}

impl AuthUser {
    pub fn new(id: i32, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
        }
    }
}

/// Where the request was going. Only used for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTarget<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub request_id: Option<&'a str>,
}

impl<'a> RequestTarget<'a> {
    pub fn new(method: &'a str, path: &'a str, request_id: Option<&'a str>) -> Self {
        Self {
            method,
            path,
            request_id,
        }
    }
}
