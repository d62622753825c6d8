//! Business logic and port definitions for Questa.
//!
//! This crate holds the question traversal cursor, the dialogue state
//! machine, and the "ports" (bank, answer log, messenger traits) that the
//! infrastructure layer implements. It depends only on `questa-types` --
//! never on `questa-infra` or any IO crate.

pub mod bank;
pub mod dialogue;
pub mod outbound;
pub mod record;
pub mod traversal;
