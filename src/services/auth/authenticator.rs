use std::sync::Arc;

use super::bearer::extract_bearer_token;
use super::error::AuthError;
use super::events::{AuthEvent, AuthEventSink, NoopSink};
use super::identity::{AuthUser, RequestTarget};
use super::token::{TokenError, TokenVerifier};

/// Bearer-token authenticator.
///
/// Holds the verifier (secret + validation rules) and the diagnostic sink.
/// Both are fixed at startup and shared read-only across requests.
#[derive(Clone)]
pub struct Authenticator {
    verifier: TokenVerifier,
    sink: Arc<dyn AuthEventSink>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("verifier", &self.verifier)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier,
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn AuthEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Validate the raw `Authorization` header and return the identity it carries.
    ///
    /// Every outcome is reported to the sink before returning.
    pub fn authenticate(
        &self,
        header: Option<&str>,
        target: RequestTarget<'_>,
    ) -> Result<AuthUser, AuthError> {
        match self.check(header) {
            Ok(user) => {
                self.sink
                    .record(&AuthEvent::Authenticated { user: &user, target });
                Ok(user)
            }
            Err(error) => {
                self.sink
                    .record(&AuthEvent::AuthenticationFailed { error: &error, target });
                Err(error)
            }
        }
    }

    fn check(&self, header: Option<&str>) -> Result<AuthUser, AuthError> {
        let token = extract_bearer_token(header)?;

        self.verifier.verify_identity(&token).map_err(|e| match e {
            TokenError::MissingClaim(_) => AuthError::InvalidClaims(e),
            _ => AuthError::InvalidToken(e),
        })
    }
}
