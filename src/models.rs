/// What the bot API reported back after a message was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: i32,
    pub chat_id: i64,
}

/// Result of one successful polling cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    NoSubmissions,
    Unchanged,
    Notified,
}
