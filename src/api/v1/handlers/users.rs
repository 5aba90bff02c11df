/*
 * Responsibility
 * - /users group handlers (behind the access middleware)
 * - User CRUD needs a user store and is not part of this service
 */
use axum::Json;

use crate::api::v1::{dto::users::CurrentUserResponse, extractors::CurrentUser};

/// GET /users/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<CurrentUserResponse> {
    Json(user.into())
}
