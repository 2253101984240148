//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::{PageContext, non_empty};
use crate::net::types::RegisterRequest;
use crate::routing::LOGIN_PATH;

fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let (Some(username), Some(email)) = (non_empty(username), non_empty(email)) else {
        return Err("Fill in username, email, and password.");
    };
    if password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest { username, email, password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = PageContext::from_context();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
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
            match ctx.api.register(&request).await {
                Ok(resp) if !resp.token.trim().is_empty() => {
                    ctx.session().sign_in(&resp.token);
                    ctx.refresh_auth();
                }
                Ok(_) => error.set(Some("Registered. Please sign in.".to_owned())),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
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
                    {move || if busy.get() { "Creating..." } else { "Register" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
