//! Core domain + application logic for the Trustfund onboarding bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the backend HTTP API
//! live behind ports (traits) implemented in adapter crates.

pub mod backend;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod replies;
pub mod router;

pub use errors::{Error, Result};
