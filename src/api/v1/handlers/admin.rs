/*
 * Responsibility
 * - /admin group handlers (behind access + role middleware)
 */
use axum::{Json, extract::State};

use crate::api::v1::{dto::users::AdminSessionResponse, extractors::CurrentUser};
use crate::state::AppState;

/// GET /admin/me
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<AdminSessionResponse> {
    Json(AdminSessionResponse {
        user: user.into(),
        allowed_roles: state.admin.allowed_roles().to_vec(),
    })
}
