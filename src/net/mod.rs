//! Networking modules for the auth REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls behind the `AuthApi` seam and `types` defines
//! the request/response bodies.

pub mod api;
pub mod types;
