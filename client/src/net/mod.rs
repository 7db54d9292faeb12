//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the session-aware client, `transport` is the HTTP seam, and
//! `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
