//! `Authorization: Bearer <token>` header parsing.
//!
//! The checks run in a fixed order and each maps to its own rejection:
//! missing header, scheme prefix, field count, scheme word, empty token.

use super::error::AuthError;

const SCHEME: &str = "bearer";

/// Extract the candidate token from a raw `Authorization` header value.
///
/// The token is every whitespace-separated field after the scheme, re-joined
/// with single spaces.
pub fn extract_bearer_token(header: Option<&str>) -> Result<String, AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingHeader),
    };

    // "bearer " including the separating space, compared ASCII case-insensitively.
    let has_prefix = header
        .as_bytes()
        .get(..=SCHEME.len())
        .is_some_and(|p| {
            p[..SCHEME.len()].eq_ignore_ascii_case(SCHEME.as_bytes()) && p[SCHEME.len()] == b' '
        });
    if !has_prefix {
        return Err(AuthError::InvalidFormat);
    }

    let mut fields = header.split_whitespace();
    let scheme = fields.next().ok_or(AuthError::MissingToken)?;
    let rest: Vec<&str> = fields.collect();
    if rest.is_empty() {
        return Err(AuthError::MissingToken);
    }

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(AuthError::InvalidFormat);
    }

    let token = rest.join(" ");
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
