//! Telegram Bot API `sendMessage` client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::OrderNotifier;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// Posts messages to one chat through the Bot API. No retry.
pub struct TelegramNotifier {
    client: reqwest::Client,
    /// Contains the bot token, never logged
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_base: &str,
        bot_token: &str,
        chat_id: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), bot_token),
            chat_id: chat_id.to_string(),
        })
    }
}

#[async_trait]
impl OrderNotifier for TelegramNotifier {
    async fn send(&self, text: &str) -> bool {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = match self.client.post(&self.url).json(&body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e.without_url(), "Telegram request failed");
                return false;
            }
        };

        let status = response.status();
        let reply = match response.json::<BotResponse>().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(status = %status, error = %e.without_url(), "Telegram response could not be decoded");
                return false;
            }
        };

        if status.is_success() && reply.ok {
            let message_id = reply
                .result
                .as_ref()
                .and_then(|r| r.get("message_id"))
                .and_then(|id| id.as_i64());
            tracing::info!(chat_id = %self.chat_id, message_id = ?message_id, "Telegram message sent");
            true
        } else {
            tracing::warn!(
                status = %status,
                description = reply.description.as_deref().unwrap_or("-"),
                "Telegram rejected message"
            );
            false
        }
    }
}
