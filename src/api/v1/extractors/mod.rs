pub mod auth_ctx;

pub use auth_ctx::{CurrentUser, auth_user};
