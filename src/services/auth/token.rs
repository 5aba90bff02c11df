use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

use super::identity::AuthUser;

/// HMAC family only. Asymmetric algorithms and `none` never reach signature checks.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

// Errors returned by access-token verification + claim shape checks.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("missing '{0}' claim")]
    MissingClaim(&'static str),

    #[error("signing secret is empty")]
    EmptySecret,
}

/// Access token (JWT) claims.
///
/// NOTE:
/// - `user_id` / `role` are optional at the serde level so that a token with a
///   valid signature but the wrong shape is reported as a claims error, not a
///   decode error.
/// - `exp` is required; `nbf` is validated when present.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub role: Option<String>,

    pub exp: u64,
    #[serde(default)]
    pub nbf: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
}

/// HMAC access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Tokens carry no audience; do not reject ones that happen to include `aud`.
        validation.validate_aud = false;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Verify signature, algorithm and temporal claims, then decode.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify, then require the `{user_id, role}` shape.
    ///
    /// This is the entry-point used by the Authenticator.
    pub fn verify_identity(&self, token: &str) -> Result<AuthUser, TokenError> {
        let claims = self.verify(token)?;

        let id = claims.user_id.ok_or(TokenError::MissingClaim("user_id"))?;
        let role = claims.role.ok_or(TokenError::MissingClaim("role"))?;

        Ok(AuthUser { id, role })
    }
}
