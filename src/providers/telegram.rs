use anyhow::Result;
use async_trait::async_trait;
use teloxide::requests::{Request, Requester};
use teloxide::types::{ChatId, Recipient};
use teloxide::Bot;

use crate::models::DeliveryReceipt;

/// Outbound side of a chat bot.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<DeliveryReceipt>;
}

pub struct Telegram {
    pub bot: Bot,
}

impl Telegram {
    pub fn new(token: &str) -> Self {
        Telegram {
            bot: Bot::new(token),
        }
    }
}

/// Numeric ids go to a chat, anything else (`@channel`) is a public channel username.
pub fn recipient(chat_id: &str) -> Recipient {
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

#[async_trait]
impl MessageSender for Telegram {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<DeliveryReceipt> {
        let sent = self.bot.send_message(recipient(chat_id), text).send().await?;
        Ok(DeliveryReceipt {
            message_id: sent.id.0,
            chat_id: sent.chat.id.0,
        })
    }
}
