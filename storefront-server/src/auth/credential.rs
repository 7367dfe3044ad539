//! Admin credential verification
//!
//! Passwords are stored as Argon2 PHC strings in `admin_user`.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::ServerError;
use crate::db::repository::admin;

/// Checks a username/password pair
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Password hashed once per verifier; unknown usernames are checked
/// against it so both paths pay for one Argon2 verification
const DUMMY_PASSWORD: &str = "storefront-unknown-admin";

/// Verifier backed by the `admin_user` table
pub struct DbCredentialVerifier {
    pool: SqlitePool,
    dummy_hash: Option<String>,
}

impl DbCredentialVerifier {
    pub fn new(pool: SqlitePool) -> Self {
        let dummy_hash = hash_password(DUMMY_PASSWORD)
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to prepare dummy password hash"))
            .ok();
        Self { pool, dummy_hash }
    }
}

#[async_trait]
impl CredentialVerifier for DbCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> bool {
        match admin::find_by_username(&self.pool, username).await {
            Ok(Some(user)) => verify_password(password, &user.password_hash),
            Ok(None) => {
                if let Some(hash) = &self.dummy_hash {
                    let _ = verify_password(password, hash);
                }
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load admin user");
                false
            }
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Create the configured admin account if it does not exist yet
///
/// Returns `true` when a new account was written. An existing account keeps
/// its stored password.
pub async fn bootstrap_admin(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<bool, ServerError> {
    if admin::find_by_username(pool, username).await?.is_some() {
        return Ok(false);
    }
    let hash = hash_password(password)
        .map_err(|e| ServerError::Internal(anyhow::anyhow!("failed to hash admin password: {e}")))?;
    admin::create(pool, username, &hash).await?;
    tracing::info!(username = %username, "Admin account created");
    Ok(true)
}
