//! Route handlers for the HTTP endpoints

pub mod auth;
