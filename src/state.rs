/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - authenticator: bearer verification for every protected group
 *   - admin: role gate for the /admin group
 * - Cheap to Clone (everything behind Arc), read-only after startup
 */
use std::sync::Arc;

use crate::services::auth::{Authenticator, Authorizer};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
    pub admin: Arc<Authorizer>,
}

impl AppState {
    pub fn new(authenticator: Arc<Authenticator>, admin: Arc<Authorizer>) -> Self {
        Self {
            authenticator,
            admin,
        }
    }
}
