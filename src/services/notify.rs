use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;

/// Delivery channel for countdown completion messages.
///
/// The countdown task only ever talks to this trait, never to Telegram
/// directly, so tests can substitute a recording implementation.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the chat that originated the claim.
    async fn notify(&self, chat_id: i64, text: &str) -> Result<()>;
}

/// Sends notifications through the Telegram bot API.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(teloxide::types::ChatId(chat_id), text)
            .await?;
        Ok(())
    }
}
