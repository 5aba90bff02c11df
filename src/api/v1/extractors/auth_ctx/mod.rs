/*!
 * Authentication context extractor
 *
 * Public API:
 * - auth_user (lookup from request extensions)
 * - CurrentUser (axum extractor)
 */

mod core;
mod types;

pub use self::core::auth_user;
pub use types::CurrentUser;
