use axum::extract::FromRequestParts;
use axum::http::{Extensions, request::Parts};

use crate::error::{ApiError, AppError};
use crate::middleware::http::request_id;
use crate::services::auth::AuthUser;

use super::CurrentUser;

/// Context lookup: the identity attached to this request, if any.
pub fn auth_user(extensions: &Extensions) -> Option<&AuthUser> {
    extensions.get::<AuthUser>()
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        auth_user(&parts.extensions)
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized").with_request_id(request_id(&parts.extensions))
            })
    }
}
