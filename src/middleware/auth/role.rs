//! Role gate for a route group.
//!
//! Expects `access` to have run first on the same group. If no [`AuthUser`] is
//! in the extensions the request is rejected with 401 (wiring defect, not a
//! client error); a role outside the allow-list gets 403.
//!
//! [`AuthUser`]: crate::services::auth::AuthUser

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::auth_user;
use crate::error::{ApiError, AppError};
use crate::middleware::http::request_id;
use crate::services::auth::{Authorizer, RequestTarget};

/// Restrict every route of `router` to the roles of `authorizer`.
pub fn apply<S>(router: Router<S>, authorizer: Arc<Authorizer>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(authorizer, role_middleware))
}

async fn role_middleware(
    State(authorizer): State<Arc<Authorizer>>,
    OriginalUri(original_uri): OriginalUri,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let request_id = request_id(req.extensions());

    let result = {
        let target = RequestTarget::new(
            req.method().as_str(),
            original_uri.path(),
            request_id.as_deref(),
        );
        authorizer.authorize_context(auth_user(req.extensions()), target)
    };

    result.map_err(|e| AppError::from(e).with_request_id(request_id))?;

    Ok(next.run(req).await)
}
