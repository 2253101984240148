//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Shared Wishlists"</h1>
            <p class="home-page__lead">
                "Collect gift ideas, invite friends, and react to each other's picks."
            </p>
            <Show
                when=move || auth.get().authenticated
                fallback=|| {
                    view! {
                        <nav class="home-page__actions">
                            <A href=LOGIN_PATH>"Sign in"</A>
                            <A href=REGISTER_PATH>"Create account"</A>
                        </nav>
                    }
                }
            >
                <nav class="home-page__actions">
                    <A href=DASHBOARD_PATH>"Go to your wishlists"</A>
                </nav>
            </Show>
        </div>
    }
}
