//! SDK error types.
//!
//! [`SdkError`] is returned by the fallible `try_*` operations of
//! [`AssistantClient`](crate::AssistantClient). The public operations never
//! surface it: they log it and return their fallback instead.

/// Error type for a single call to the generation endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// No API key was configured; no request is made.
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    /// Transport failure: connection refused, DNS, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response (or the JSON inside the candidate text) did not match
    /// the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response carried no candidate text.
    #[error("empty response from model")]
    EmptyResponse,
}
