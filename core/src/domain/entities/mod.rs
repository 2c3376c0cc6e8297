//! Domain entities representing core business objects.

pub mod identity;
pub mod token;

// Re-export commonly used types
pub use identity::Identity;
pub use token::{
    AccessClaims, RefreshClaims, RefreshTokenRecord, TokenClaims,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
