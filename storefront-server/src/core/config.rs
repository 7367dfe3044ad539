//! Server configuration

use chrono::{FixedOffset, Offset, Utc};
use shared::Lang;

use super::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / staging / production |
/// | HTTP_PORT | 3000 | listen port |
/// | DATABASE_PATH | ./data/storefront.db | SQLite file |
/// | LOG_LEVEL | info | base log filter |
/// | LOG_JSON | false | JSON console output |
/// | LOG_DIR | - | enables file logs |
/// | JWT_SECRET | dev value in development | admin token secret |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | - | bootstrap admin |
/// | TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID | - | order notification destination |
/// | TELEGRAM_API_BASE | https://api.telegram.org | provider base URL |
/// | NOTIFY_LANG | uz | notification language |
/// | NOTIFY_UTC_OFFSET_MINUTES | 300 | notification timestamp offset |
/// | REQUEST_TIMEOUT_MS | 30000 | outbound HTTP timeout |
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub http_port: u16,
    pub database_path: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub jwt_secret: String,
    /// Admin created at startup when it does not exist yet
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub telegram: TelegramConfig,
    pub notify_lang: Lang,
    /// Offset applied to the notification timestamp (Asia/Tashkent = +300)
    pub notify_utc_offset_minutes: i32,
    pub request_timeout_ms: u64,
}

/// Order notification destination
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: String,
}

impl TelegramConfig {
    /// Bot token and chat id, when both are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.bot_token.as_deref()?, self.chat_id.as_deref()?))
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base: "https://api.telegram.org".into(),
        }
    }
}

impl Default for Config {
    /// Development defaults, no environment lookups
    fn default() -> Self {
        Self {
            environment: "development".into(),
            http_port: 3000,
            database_path: "./data/storefront.db".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            jwt_secret: "dev-JWT_SECRET-not-for-production".into(),
            admin_username: None,
            admin_password: None,
            telegram: TelegramConfig::default(),
            notify_lang: Lang::Uz,
            notify_utc_offset_minutes: 300,
            request_timeout_ms: 30_000,
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ServerError> {
    match env_opt(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("{name} has an invalid value '{raw}'"))),
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, ServerError> {
        match env_opt(name) {
            Some(v) => Ok(v),
            None if environment == "development" => Ok(format!("dev-{name}-not-for-production")),
            None => Err(ServerError::Config(format!(
                "{name} must be set in {environment} environment"
            ))),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();
        let environment = env_opt("ENVIRONMENT").unwrap_or(defaults.environment);

        let notify_lang = match env_opt("NOTIFY_LANG") {
            None => defaults.notify_lang,
            Some(tag) => Lang::from_tag(&tag)
                .ok_or_else(|| ServerError::Config(format!("NOTIFY_LANG '{tag}' is not supported")))?,
        };

        let notify_utc_offset_minutes =
            env_parse("NOTIFY_UTC_OFFSET_MINUTES", defaults.notify_utc_offset_minutes)?;
        if offset_from_minutes(notify_utc_offset_minutes).is_none() {
            return Err(ServerError::Config(format!(
                "NOTIFY_UTC_OFFSET_MINUTES {notify_utc_offset_minutes} is out of range"
            )));
        }

        Ok(Self {
            http_port: env_parse("HTTP_PORT", defaults.http_port)?,
            database_path: env_opt("DATABASE_PATH").unwrap_or(defaults.database_path),
            log_level: env_opt("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env_parse("LOG_JSON", defaults.log_json)?,
            log_dir: env_opt("LOG_DIR"),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            admin_username: env_opt("ADMIN_USERNAME"),
            admin_password: env_opt("ADMIN_PASSWORD"),
            telegram: TelegramConfig {
                bot_token: env_opt("TELEGRAM_BOT_TOKEN"),
                chat_id: env_opt("TELEGRAM_CHAT_ID"),
                api_base: env_opt("TELEGRAM_API_BASE").unwrap_or(defaults.telegram.api_base),
            },
            notify_lang,
            notify_utc_offset_minutes,
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms)?,
            environment,
        })
    }

    /// Offset for notification timestamps (UTC if out of range)
    pub fn notify_offset(&self) -> FixedOffset {
        offset_from_minutes(self.notify_utc_offset_minutes).unwrap_or_else(|| Utc.fix())
    }
}
