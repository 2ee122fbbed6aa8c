//! Admin authentication
//!
//! JWT bearer tokens + Argon2 password hashes. Shoppers never authenticate;
//! this exists for the admin console alone.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;
