//! # Feature: Picker Sessions
//!
//! Remembers each user's latest text and picker page between interactions.
//! Bounded, with idle expiry swept periodically by the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod store;

pub use store::{SessionStore, StyledRequest, UserKey};
