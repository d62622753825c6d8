//! Dialogue state machine: per-conversation sessions and the orchestrating
//! service.

pub mod service;
pub mod session;
