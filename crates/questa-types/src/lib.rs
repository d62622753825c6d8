//! Shared domain types for Questa.
//!
//! This crate contains the core domain types used across the Questa
//! workspace: question banks, dialogue state, conversation events, answer
//! records, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod bank;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod event;
pub mod record;
