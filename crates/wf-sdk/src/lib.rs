//! # WF SDK
//!
//! Client for the hosted generative-AI endpoint behind the dashboard's
//! assistant features.
//!
//! The SDK provides:
//!
//! * [`AssistantClient`]: traffic analysis, message triage, route advice,
//!   arrival notifications and nearby search. Every operation has a total
//!   form that never fails and a `try_` form that reports [`SdkError`].
//! * [`AssistantConfig`]: endpoint, key and model names, read from the
//!   environment.
//! * [`fallback`]: the values used when a call fails.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use wf_sdk::AssistantClient;
//!
//! # async fn run() {
//! let client = AssistantClient::from_env();
//! let report = client.traffic_analysis("Florence").await;
//! println!("{} ({} segments)", report.tip, report.segments.len());
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod prompts;
pub mod schema;
pub mod wire;

pub use client::AssistantClient;
pub use config::AssistantConfig;
pub use error::SdkError;
