//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, form state, API calls)
//! and delegates repeated markup to `components`. Route gating happens one
//! level up in `components::gate`, so pages assume the right auth state.


pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod wishlist;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::{AuthState, refresh};
use crate::state::session::Session;

/// Context handles every page needs.
#[derive(Clone)]
pub(crate) struct PageContext {
    pub api: ApiClient,
    pub auth: RwSignal<AuthState>,
}

impl PageContext {
    pub fn from_context() -> Self {
        Self {
            api: expect_context::<ApiClient>(),
            auth: expect_context::<RwSignal<AuthState>>(),
        }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Recompute the auth flag after a login, registration, or logout.
    pub fn refresh_auth(&self) {
        refresh(self.auth, self.session());
    }

    pub fn sign_out(&self) {
        self.session().sign_out();
        self.refresh_auth();
    }

    /// Surface `err` in `slot`, or sign out when the backend rejects the token.
    pub fn report(&self, err: &ApiError, slot: RwSignal<Option<String>>) {
        if err.is_unauthorized() {
            self.sign_out();
            return;
        }
        slot.set(Some(err.user_message()));
    }

    /// Store a load result in `target`, or report the error. Returns whether a
    /// follow-up load should still run.
    pub fn settle<T>(
        &self,
        result: Result<T, ApiError>,
        target: RwSignal<T>,
        slot: RwSignal<Option<String>>,
    ) -> bool
    where
        T: Send + Sync + 'static,
    {
        let proceed = continues_after(&result);
        match result {
            Ok(value) => target.set(value),
            Err(e) => self.report(&e, slot),
        }
        proceed
    }
}

/// A rejected token ends a load sequence; the gate is already redirecting.
pub(crate) fn continues_after<T>(result: &Result<T, ApiError>) -> bool {
    !matches!(result, Err(e) if e.is_unauthorized())
}

/// Trim `value`, returning `None` when nothing remains.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
