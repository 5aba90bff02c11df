use std::sync::Arc;

use super::error::AuthError;
use super::events::{AuthEvent, AuthEventSink, NoopSink};
use super::identity::{AuthUser, RequestTarget};

/// Role gate for one route group.
///
/// The allow-list is fixed when the group is registered. Matching is exact
/// string equality: no hierarchy, no wildcard, no case folding.
#[derive(Clone)]
pub struct Authorizer {
    allowed_roles: Vec<String>,
    sink: Arc<dyn AuthEventSink>,
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("allowed_roles", &self.allowed_roles)
            .finish_non_exhaustive()
    }
}

impl Authorizer {
    pub fn new<I, S>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_roles: allowed_roles.into_iter().map(Into::into).collect(),
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn AuthEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn allowed_roles(&self) -> &[String] {
        &self.allowed_roles
    }

    pub fn permits(&self, role: &str) -> bool {
        self.allowed_roles.iter().any(|r| r == role)
    }

    /// Role check for an identity that is known to exist.
    pub fn authorize(&self, user: &AuthUser, target: RequestTarget<'_>) -> Result<(), AuthError> {
        let required_roles = self.allowed_roles.as_slice();

        if !self.permits(&user.role) {
            self.sink.record(&AuthEvent::RoleCheckFailed {
                user: Some(user),
                required_roles,
                target,
            });
            return Err(AuthError::InsufficientPermissions);
        }

        self.sink.record(&AuthEvent::RoleCheckPassed {
            user,
            required_roles,
            target,
        });
        Ok(())
    }

    /// Role check against whatever the request context holds.
    ///
    /// `None` means the Authenticator did not run on this route group.
    pub fn authorize_context(
        &self,
        user: Option<&AuthUser>,
        target: RequestTarget<'_>,
    ) -> Result<(), AuthError> {
        match user {
            Some(user) => self.authorize(user, target),
            None => {
                self.sink.record(&AuthEvent::RoleCheckFailed {
                    user: None,
                    required_roles: &self.allowed_roles,
                    target,
                });
                Err(AuthError::Unauthorized)
            }
        }
    }
}
