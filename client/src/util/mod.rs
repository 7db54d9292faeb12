//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions and task lifetimes out of page
//! components so they can be tested without a browser.

pub mod auth;
pub mod task;
