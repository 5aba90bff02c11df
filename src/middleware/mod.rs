/*
 * Responsibility
 * - middleware public surface
 * - http (request id / access log / limits), cors, auth (authentication + role gate)
 */
pub mod auth;
pub mod cors;
pub mod http;
