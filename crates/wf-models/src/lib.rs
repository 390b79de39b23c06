#![deny(missing_docs)]

//! # WF Models
//!
//! Core data types for the WF Autotrasporti logistics dashboard.
//!
//! Every record here is a plain value: it is created once at startup from
//! the literals in [`mock`], or produced by the AI-service client, and held
//! in memory for the session. Nothing is persisted and no record enforces
//! referential integrity.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | Pharma partners (`Client`, `ClientId`, `ClientStatus`) |
//! | [`message`] | Inbound messages, priority and AI triage (`Message`, `MessageInsight`) |
//! | [`route`] | Route stops, location and aggregate `TransportState` |
//! | [`traffic`] | Traffic segments and the AI traffic report |
//! | [`places`] | Nearby-place search results |
//! | [`notification`] | Confirmed arrival notifications |
//! | [`mock`] | Session mock data |

pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod notification;
pub mod places;
pub mod route;
pub mod traffic;

// Re-export all public types at crate root for convenience.
pub use client::*;
pub use error::*;
pub use message::*;
pub use notification::*;
pub use places::*;
pub use route::*;
pub use traffic::*;
