//! HTTP access layer for the Sentipulse backend.
//!
//! [`Transport`] is the single chokepoint every call goes through;
//! [`ApiClient`] wraps it with one typed method per endpoint.

pub mod api;
pub mod dto;
pub mod transport;

pub use api::{AdminApi, ApiClient};
pub use transport::Transport;
