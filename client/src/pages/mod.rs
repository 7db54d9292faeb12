//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session and
//! network details to `state` and `net`.

pub mod dashboard;
pub mod login;
