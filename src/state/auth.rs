//! Authentication flag for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is derived from token presence and never stored on its own. It is
//! recomputed at mount, after every login/registration/logout, and whenever
//! another tab mutates local storage. Route gates read it reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::Session;

/// Authentication state shared through context as `RwSignal<AuthState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated() }
    }
}

/// Recompute the flag from `session`, writing the signal only on change.
pub fn refresh(auth: RwSignal<AuthState>, session: &Session) {
    let next = AuthState::from_session(session);
    if auth.get_untracked() != next {
        auth.set(next);
    }
}
