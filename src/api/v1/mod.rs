/*
 * Responsibility
 * - v1 public surface (routes() + the pieces other middleware reuse)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
