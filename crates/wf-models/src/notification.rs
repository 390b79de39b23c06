//! Arrival notifications confirmed by an operator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::route::StopId;

/// A client notification that has been confirmed and handed off for
/// delivery. Held in a session-only outbox.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentNotification {
    /// Unique identifier of this send.
    pub id: Uuid,
    /// Stop the notification refers to.
    pub stop_id: StopId,
    /// Text that was sent.
    pub text: String,
    /// When the send completed.
    pub sent_at: DateTime<Utc>,
}

impl SentNotification {
    /// Record a send happening now.
    pub fn now(stop_id: StopId, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            stop_id,
            text,
            sent_at: Utc::now(),
        }
    }
}
