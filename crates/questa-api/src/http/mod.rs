//! HTTP/REST API layer for Questa.
//!
//! Axum-based REST API at `/api/v1/` with an envelope response format and
//! CORS support. Conversations are driven webhook style: a client POSTs an
//! event and receives the dialogue service's reply batch in the response.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
