//! Route authorization.
//!
//! The decision is synchronous and derived only from whether the session
//! store holds a token. The token is never validated here; an expired token
//! passes until a protected call is rejected and the API client clears it.

use tracing::debug;

use crate::session::SessionStore;

/// A route the guard can reason about.
pub trait GuardedRoute: Clone + PartialEq {
    /// Where unauthenticated visitors are sent.
    fn login() -> Self;
    /// Where authenticated visitors to the login page are sent.
    fn home() -> Self;
    fn is_protected(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision<R> {
    Render,
    Redirect(R),
}

/// Decide for a known authentication state.
pub fn decide<R: GuardedRoute>(target: &R, authenticated: bool) -> GuardDecision<R> {
    if !authenticated && target.is_protected() {
        GuardDecision::Redirect(R::login())
    } else if authenticated && *target == R::login() {
        GuardDecision::Redirect(R::home())
    } else {
        GuardDecision::Render
    }
}

/// Decide by querying the store. Called on every render.
pub fn evaluate<R: GuardedRoute>(target: &R, store: &dyn SessionStore) -> GuardDecision<R> {
    let authenticated = store.is_authenticated();
    let decision = decide(target, authenticated);
    if let GuardDecision::Redirect(_) = decision {
        debug!(authenticated, "Guard redirect");
    }
    decision
}
