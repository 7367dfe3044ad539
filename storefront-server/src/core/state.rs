//! Shared handler state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{CredentialVerifier, DbCredentialVerifier, JwtService, bootstrap_admin};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::notify::NotificationRelay;

/// Cloned into every request; everything inside is shared
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub jwt: Arc<JwtService>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub notifications: NotificationRelay,
}

impl ServerState {
    /// Assemble state from ready parts (tests swap the notifier here)
    pub fn new(config: Config, db: DbService, notifications: NotificationRelay) -> Self {
        let jwt = Arc::new(JwtService::new(&config.jwt_secret));
        let verifier: Arc<dyn CredentialVerifier> =
            Arc::new(DbCredentialVerifier::new(db.pool.clone()));
        Self {
            config: Arc::new(config),
            db,
            jwt,
            verifier,
            notifications,
        }
    }

    /// Open the database, create the configured admin, pick the notifier
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;

        match (&config.admin_username, &config.admin_password) {
            (Some(username), Some(password)) => {
                bootstrap_admin(&db.pool, username, password).await?;
            }
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("ADMIN_USERNAME and ADMIN_PASSWORD must both be set to create an admin");
            }
            (None, None) => {}
        }

        let notifications = NotificationRelay::from_config(config);
        Ok(Self::new(config.clone(), db, notifications))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
