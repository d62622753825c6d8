//! HTTP request handlers for the REST API.

pub mod category;
pub mod conversation;
