// src/providers/tests/telegram_tests.rs

use super::super::telegram::recipient;
use teloxide::types::{ChatId, Recipient};

#[test]
fn test_numeric_chat_id_is_a_chat() {
    assert_eq!(recipient("424242"), Recipient::Id(ChatId(424242)));
    assert_eq!(recipient("-1001234567890"), Recipient::Id(ChatId(-1001234567890)));
}

#[test]
fn test_non_numeric_chat_id_is_a_channel() {
    assert_eq!(
        recipient("@homework_updates"),
        Recipient::ChannelUsername("@homework_updates".to_string())
    );
}
