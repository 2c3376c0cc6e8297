//! HTTP surface for the Signet token service
//!
//! Exposes the actix-web application factory, the route handlers for the
//! token lifecycle endpoints, their DTOs, and the translation layer from
//! domain errors to HTTP responses. The binary wires in the concrete
//! identity provider and revocation registry; integration tests assemble
//! the exact same app through [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
