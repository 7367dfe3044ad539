//! Admin authentication
//!
//! - [`CredentialVerifier`] - username/password check over Argon2 hashes
//! - [`JwtService`] - bearer token issue/validation
//! - [`require_admin`] - route layer for admin endpoints

pub mod credential;
pub mod jwt;
pub mod middleware;

pub use credential::{CredentialVerifier, DbCredentialVerifier, bootstrap_admin, hash_password};
pub use jwt::{Claims, JwtError, JwtService};
pub use middleware::{AdminIdentity, require_admin};
