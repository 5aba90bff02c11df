//! Bearer-token authentication and role-based route gating for an axum API.
//!
//! - [`services::auth::Authenticator`]: `Authorization: Bearer <jwt>` → [`services::auth::AuthUser`]
//! - [`services::auth::Authorizer`]: per route group role allow-list
//! - [`middleware::auth`]: axum wiring for both
//! - [`app::build_router`]: the assembled service

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
