//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `dashboard`) so pages depend on
//! small focused models that are testable without a browser.

pub mod dashboard;
pub mod session;
