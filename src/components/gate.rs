//! Route guard applying the auth-gate rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route view. The auth flag is read reactively, so a login, a
//! logout, or a `storage` event from another tab re-evaluates the guard and
//! redirects without a page reload.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routing::AppRoute;
use crate::state::auth::AuthState;

/// Render `children` when `route`'s access class permits, otherwise redirect.
#[component]
pub fn Gate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match route.redirect(auth.get().authenticated) {
        Some(target) => view! { <Redirect path=target/> }.into_any(),
        None => children().into_any(),
    }
}
