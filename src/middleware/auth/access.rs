//! Bearer token verification → AuthUser in request extensions.
//!
//! - Reads `Authorization`, delegates every check to [`Authenticator`].
//! - Success: inserts [`AuthUser`] into the request extensions and runs the next stage.
//! - Failure: 401 JSON error (with request id) and the chain stops here.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::{ApiError, AppError};
use crate::middleware::http::request_id;
use crate::services::auth::{Authenticator, RequestTarget};

/// Require a valid bearer token on every route of `router`.
///
/// Example:
/// ```ignore
/// let users = Router::new().route("/me", get(me));
/// let users = middleware::auth::access::apply(users, state.authenticator.clone());
/// ```
pub fn apply<S>(router: Router<S>, authenticator: Arc<Authenticator>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // route_layer: unmatched paths still 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(
        authenticator,
        access_middleware,
    ))
}

async fn access_middleware(
    State(authenticator): State<Arc<Authenticator>>,
    OriginalUri(original_uri): OriginalUri,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let request_id = request_id(req.extensions());
    let method = req.method().clone();

    let result = {
        // Non UTF-8 bytes cannot form a valid header/token; lossy conversion
        // lets the format / token checks reject them.
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()));

        let target = RequestTarget::new(
            method.as_str(),
            original_uri.path(),
            request_id.as_deref(),
        );

        authenticator.authenticate(header.as_deref(), target)
    };

    let user = result.map_err(|e| AppError::from(e).with_request_id(request_id))?;

    // middleware → extractor hand-off
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
