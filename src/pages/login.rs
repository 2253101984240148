//! Login page with email + password credentials.
//!
//! On success the issued token is stored and the auth flag refreshed; the
//! route gate then moves the user on to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::{PageContext, non_empty};
use crate::net::types::LoginRequest;
use crate::routing::REGISTER_PATH;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    match (non_empty(email), password.is_empty()) {
        (Some(email), false) => Ok(LoginRequest { email, password: password.to_owned() }),
        _ => Err("Enter your email and password."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = PageContext::from_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let ctx = ctx.clone();
        crate::util::task::spawn(async move {
            match ctx.api.login(&request).await {
                Ok(resp) if !resp.token.trim().is_empty() => {
                    ctx.session().sign_in(&resp.token);
                    ctx.refresh_auth();
                }
                Ok(_) => error.set(Some("Login response did not include a token.".to_owned())),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "No account? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </form>
        </div>
    }
}
