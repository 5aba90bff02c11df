use thiserror::Error;

use super::token::TokenError;

/// Every way the auth pipeline can reject a request.
///
/// The `Display` text is the client-facing message. `InvalidToken` keeps the
/// underlying cause for logs only; clients never see it.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingHeader,

    #[error("Token is required")]
    MissingToken,

    #[error("Invalid authorization header format. Expected: Bearer <token>")]
    InvalidFormat,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] TokenError),

    #[error("Invalid token claims")]
    InvalidClaims(#[source] TokenError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: insufficient permissions")]
    InsufficientPermissions,
}

/// Coarse failure class, one per row of the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    MissingAuth,
    InvalidFormat,
    InvalidToken,
    Unauthorized,
    InsufficientPermissions,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::MissingHeader | Self::MissingToken => AuthErrorKind::MissingAuth,
            Self::InvalidFormat => AuthErrorKind::InvalidFormat,
            Self::InvalidToken(_) | Self::InvalidClaims(_) => AuthErrorKind::InvalidToken,
            Self::Unauthorized => AuthErrorKind::Unauthorized,
            Self::InsufficientPermissions => AuthErrorKind::InsufficientPermissions,
        }
    }
}
