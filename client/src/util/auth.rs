//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. The
//! decision is a pure function of the session status so it can be evaluated
//! fresh on every navigation and tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionStatus;

/// Outcome of one navigation attempt to a protected path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested view.
    Authorized,
    /// Send the user to the login route; the requested path is dropped.
    Redirected,
}

/// Any stored token authorizes; validity is left to the server.
pub fn evaluate_guard(status: &SessionStatus) -> GuardOutcome {
    if status.is_authenticated() { GuardOutcome::Authorized } else { GuardOutcome::Redirected }
}
