//! Order notification relay
//!
//! Formats a persisted order and forwards it to the configured messaging
//! endpoint. Delivery is best-effort: the outcome is logged and never
//! reaches the order response.

pub mod format;
pub mod telegram;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::FixedOffset;
use shared::Lang;
use shared::models::Order;
use tokio::task::JoinHandle;

use crate::core::Config;
pub use format::format_order_message;
pub use telegram::TelegramNotifier;

/// Outbound message channel: send text, report success
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn send(&self, text: &str) -> bool;
}

/// Used when no destination is configured
pub struct DisabledNotifier;

#[async_trait]
impl OrderNotifier for DisabledNotifier {
    async fn send(&self, _text: &str) -> bool {
        tracing::warn!("Order notification skipped: TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not configured");
        false
    }
}

/// Notifier for the configured destination
pub fn build_notifier(config: &Config) -> Arc<dyn OrderNotifier> {
    let telegram = &config.telegram;
    let Some((token, chat_id)) = telegram.credentials() else {
        tracing::warn!("Telegram not configured, order notifications disabled");
        return Arc::new(DisabledNotifier);
    };
    match TelegramNotifier::new(
        &telegram.api_base,
        token,
        chat_id,
        Duration::from_millis(config.request_timeout_ms),
    ) {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Telegram client, order notifications disabled");
            Arc::new(DisabledNotifier)
        }
    }
}

/// Notifier plus message language and time offset
#[derive(Clone)]
pub struct NotificationRelay {
    notifier: Arc<dyn OrderNotifier>,
    lang: Lang,
    offset: FixedOffset,
}

impl NotificationRelay {
    pub fn new(notifier: Arc<dyn OrderNotifier>, lang: Lang, offset: FixedOffset) -> Self {
        Self {
            notifier,
            lang,
            offset,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(build_notifier(config), config.notify_lang, config.notify_offset())
    }

    /// Format and send; returns the delivery outcome
    pub async fn notify(&self, order: &Order) -> bool {
        let text = format_order_message(order, self.lang, self.offset);
        let delivered = self.notifier.send(&text).await;
        if delivered {
            tracing::info!(order_id = order.id, "Order notification delivered");
        } else {
            tracing::warn!(order_id = order.id, "Order notification not delivered");
        }
        delivered
    }

    /// Detached delivery for an already committed order
    pub fn spawn(&self, order: Order) -> JoinHandle<bool> {
        let relay = self.clone();
        tokio::spawn(async move { relay.notify(&order).await })
    }
}
