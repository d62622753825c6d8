//! Infrastructure layer for Questa.
//!
//! Contains implementations of the port traits defined in `questa-core`:
//! the JSON bank loader, the JSONL answer log, plus config loading and
//! data-directory resolution.

pub mod bank;
pub mod config;
pub mod record;
