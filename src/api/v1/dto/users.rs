/*
 * Responsibility
 * - Response DTOs for the current-user endpoints
 */
use serde::Serialize;

use crate::services::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: i32,
    pub role: String,
}

impl From<AuthUser> for CurrentUserResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminSessionResponse {
    #[serde(flatten)]
    pub user: CurrentUserResponse,
    pub allowed_roles: Vec<String>,
}
