// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Sent,
    Received,
}

/// A single immutable chat entry. Messages are only ever appended to a
/// conversation, never edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Message {
            sender,
            text: text.into(),
            timestamp: now_millis(),
        }
    }

    pub fn sent(text: impl Into<String>) -> Self {
        Message::new(Sender::Sent, text)
    }

    pub fn received(text: impl Into<String>) -> Self {
        Message::new(Sender::Received, text)
    }
}

// Timestamps are persisted with millisecond precision, so clamp them at
// creation to keep the save/load round trip lossless.
fn now_millis() -> DateTime<Utc> {
    let ms = Utc::now().timestamp_millis();
    DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now)
}

/// Opaque identifier for a conversation, derived from the creation time in
/// epoch milliseconds. The registry bumps the value until it is unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn from_millis(ms: i64) -> Self {
        ConversationId(ms.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered thread of messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: ConversationId, name: impl Into<String>) -> Self {
        Conversation {
            id,
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// The complete persisted application state: every conversation plus the
/// current selection. Insertion order is newest-first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    pub conversations: Vec<Conversation>,
    pub current_id: Option<ConversationId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_as_lowercase_words() {
        let msg = Message::sent("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sent\""));

        let msg = Message::received("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"received\""));
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let msg = Message::sent("hi");
        let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert!(value["timestamp"].is_i64());
        assert_eq!(
            value["timestamp"].as_i64().unwrap(),
            msg.timestamp.timestamp_millis()
        );
    }

    #[test]
    fn message_round_trips_through_json() {
        let msg = Message::received("round trip");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn conversation_id_is_transparent_in_json() {
        let id = ConversationId::from_millis(1700000000000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1700000000000\"");
    }
}
