//! Factory: build the auth gate from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{AuthEventSink, Authenticator, Authorizer, TokenVerifier};

pub fn build_authenticator(
    config: &Config,
    sink: Arc<dyn AuthEventSink>,
) -> Result<Arc<Authenticator>, AppError> {
    let verifier = TokenVerifier::new(config.jwt_secret.as_bytes(), config.jwt_leeway_seconds)
        .map_err(|e| {
            tracing::error!(error = %e, "failed to build token verifier");
            AppError::Internal
        })?;

    Ok(Arc::new(Authenticator::new(verifier).with_sink(sink)))
}

pub fn build_admin_authorizer(config: &Config, sink: Arc<dyn AuthEventSink>) -> Arc<Authorizer> {
    Arc::new(Authorizer::new(config.admin_roles.iter().cloned()).with_sink(sink))
}
