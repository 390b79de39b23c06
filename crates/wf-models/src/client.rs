//! Pharma partner records shown in the client directory.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ClientId
// ---------------------------------------------------------------------------

/// Identifier of a client, referenced by [`Message::client_id`](crate::Message).
///
/// # Examples
///
/// ```
/// use wf_models::ClientId;
///
/// let id = ClientId::new("c1");
/// assert_eq!(id.to_string(), "c1");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Create a new client identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// ClientStatus
// ---------------------------------------------------------------------------

/// Commercial status of a partner.
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
pub enum ClientStatus {
    /// Contract running, transports booked.
    Active,
    /// No current contract.
    Inactive,
    /// Registration awaiting approval.
    Pending,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A pharma partner. Immutable for the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique identifier.
    pub id: ClientId,
    /// Contact person.
    pub name: String,
    /// Company the contact works for.
    pub company: String,
    /// Contact e-mail.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Commercial status.
    pub status: ClientStatus,
    /// Date of the last transport, as displayed.
    pub last_transport: String,
}

impl Client {
    /// Case-insensitive substring match on the contact name or company.
    ///
    /// An empty query matches every client.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.company.to_lowercase().contains(&needle)
    }
}

/// Keep the clients matching `query`, in input order.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    clients.iter().filter(|c| c.matches_search(query)).collect()
}
