use tracing::{debug, error, info};

use crate::providers::telegram::MessageSender;

/// Delivers notifications to one chat. Delivery is best effort: failures are
/// logged here and never reach the polling loop.
pub struct Notifier<S> {
    sender: S,
    chat_id: String,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S, chat_id: &str) -> Self {
        Notifier {
            sender,
            chat_id: chat_id.to_string(),
        }
    }

    pub async fn send_message(&self, message: &str) {
        debug!(chat_id = %self.chat_id, "Sending message");
        match self.sender.send_message(&self.chat_id, message).await {
            Ok(receipt) => {
                debug!(
                    message_id = receipt.message_id,
                    chat_id = receipt.chat_id,
                    "Message delivered"
                );
                info!("Notification sent: {}", message);
            }
            Err(e) => error!("Failed to send Telegram message: {:#}", e),
        }
    }
}
