/*
 * Responsibility
 * - v1 URL layout
 * - Which groups need a token (/users) and which also need a role (/admin)
 */
use axum::{Router, routing::get};

use crate::middleware::auth::{protected, role_gated};
use crate::state::AppState;

use crate::api::v1::handlers::{admin, health::health, users};

pub fn routes(state: &AppState) -> Router<AppState> {
    let users = protected(
        Router::new().route("/me", get(users::me)),
        state.authenticator.clone(),
    );

    let admin = role_gated(
        Router::new().route("/me", get(admin::me)),
        state.authenticator.clone(),
        state.admin.clone(),
    );

    Router::new()
        .route("/health", get(health))
        .nest("/users", users)
        .nest("/admin", admin)
}
