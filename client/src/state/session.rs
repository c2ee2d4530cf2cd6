//! Session snapshot and the gate decision core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate owns one `SessionState` for the whole application and
//! re-evaluates shell choice and redirects on every auth event and
//! navigation. The decision logic lives here as plain functions of
//! (snapshot, path) so the routing contract is testable without a DOM.
//!
//! While `loading` is true the initial identity check is still in flight;
//! no redirect decision may be made in that window.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

pub const LANDING_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const SIGNUP_ROUTE: &str = "/auth/signup";
pub const DEFAULT_PROTECTED_ROUTE: &str = "/dashboard";

/// Authentication snapshot for the current visitor.
///
/// Owned exclusively by the session gate; pages read it through the
/// read-only context accessor and report changes via [`AuthEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state: identity check in flight.
    #[must_use]
    pub fn resolving() -> Self {
        Self { identity: None, loading: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self { identity: Some(identity), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Apply one auth notification, atomically replacing the snapshot.
    /// Any event ends the initial resolution window.
    pub fn apply(&mut self, event: AuthEvent) {
        self.loading = false;
        match event {
            AuthEvent::SignedIn(identity) => self.identity = Some(identity),
            AuthEvent::SignedOut => self.identity = None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Auth-change notification delivered to the gate.
///
/// The initial identity check resolves to one of these as well: a present
/// identity arrives as `SignedIn`, an absent or failed check as `SignedOut`
/// (failures degrade to "logged out" rather than crashing navigation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Identity),
    SignedOut,
}

/// Which chrome wraps the current route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    /// Neutral loading placeholder, no navigation chrome.
    Placeholder,
    /// Full admin chrome: sidebar + header around the page content.
    Admin,
    /// Page content with no admin chrome.
    Bare,
}

/// Strip a trailing slash so `/dashboard/` classifies like `/dashboard`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}

/// Routes that should only be reachable while anonymous.
#[must_use]
pub fn is_public_only(path: &str) -> bool {
    matches!(normalize_path(path), LOGIN_ROUTE | SIGNUP_ROUTE)
}

#[must_use]
pub fn is_landing(path: &str) -> bool {
    normalize_path(path) == LANDING_ROUTE
}

/// Shell choice for a (snapshot, route) pair.
#[must_use]
pub fn shell_for(session: &SessionState, path: &str) -> Shell {
    if session.loading {
        Shell::Placeholder
    } else if session.is_authenticated() && !is_public_only(path) {
        Shell::Admin
    } else {
        Shell::Bare
    }
}

/// Redirect decision for a (snapshot, route) pair.
///
/// Returns the route to navigate to, or `None` when the visitor may stay.
/// Never redirects while the initial identity check is unresolved.
#[must_use]
pub fn redirect_target(session: &SessionState, path: &str) -> Option<&'static str> {
    if session.loading {
        return None;
    }
    if session.is_authenticated() {
        if is_public_only(path) {
            return Some(DEFAULT_PROTECTED_ROUTE);
        }
        return None;
    }
    if is_public_only(path) || is_landing(path) {
        None
    } else {
        Some(LOGIN_ROUTE)
    }
}
