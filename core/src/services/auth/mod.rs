//! Authentication service orchestrating the token lifecycle

mod service;


pub use service::AuthService;
