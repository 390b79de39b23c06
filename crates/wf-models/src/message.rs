//! Inbound client messages and their AI triage.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ClientId;

/// Identifier of an inbound message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new message identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Urgency of a message, either set on the mock data or suggested by triage.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    /// Needs attention now.
    High,
    /// Handle during the shift.
    Medium,
    /// Informational.
    Low,
}

/// Tone of a message as judged by triage.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Sentiment {
    /// Satisfied client.
    Positive,
    /// Neither pleased nor upset.
    Neutral,
    /// Complaint or concern.
    Negative,
}

/// A message received from a client.
///
/// Only local UI actions mutate it (marking it read, archiving it).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Sender; not checked against the client directory.
    pub client_id: ClientId,
    /// Display name of the sender.
    pub client_name: String,
    /// Message body.
    pub content: String,
    /// Reception time.
    pub timestamp: DateTime<Utc>,
    /// Whether an operator has opened the message.
    pub is_read: bool,
    /// Urgency tag.
    pub priority: Priority,
}

impl Message {
    /// Whether the message carries the [`Priority::High`] tag.
    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Number of messages not yet read ("Pending Requests" on the dashboard).
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// Result of AI triage for one message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageInsight {
    /// Suggested urgency.
    pub priority: Priority,
    /// Detected tone.
    pub sentiment: Sentiment,
    /// Short professional follow-up.
    pub suggested_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::Utc;

    #[test]
    fn unread_count_on_mock_inbox() {
        let messages = mock::messages(Utc::now());
        assert_eq!(unread_count(&messages), 2);
    }

    #[test]
    fn unread_count_after_marking_read() {
        let mut messages = mock::messages(Utc::now());
        for m in &mut messages {
            m.is_read = true;
        }
        assert_eq!(unread_count(&messages), 0);
    }

    #[test]
    fn insight_uses_wire_field_names() {
        let json = serde_json::json!({
            "priority": "High",
            "sentiment": "Negative",
            "suggestedAction": "Call the pharmacy back."
        });
        let insight: MessageInsight = serde_json::from_value(json).unwrap();
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.sentiment, Sentiment::Negative);
        assert_eq!(insight.suggested_action, "Call the pharmacy back.");
    }

    #[test]
    fn insight_rejects_unknown_sentiment() {
        let json = serde_json::json!({
            "priority": "High",
            "sentiment": "Furious",
            "suggestedAction": "x"
        });
        assert!(serde_json::from_value::<MessageInsight>(json).is_err());
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(Priority::Low.to_string(), "Low");
    }
}
