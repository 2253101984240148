//! Dashboard listing the user's wishlists, invites, and notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Every mutation bumps a reload counter and
//! the page re-fetches from the backend; nothing is cached client-side.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::{PageContext, non_empty};
use crate::components::wishlist_card::WishlistCard;
use crate::net::types::{Notification, Wishlist, WishlistInput, WishlistRef};
use crate::util::task::spawn;

fn validate_wishlist_input(name: &str, description: &str) -> Result<WishlistInput, &'static str> {
    let name = non_empty(name).ok_or("Give the wishlist a name.")?;
    Ok(WishlistInput { name, description: non_empty(description) })
}

fn invite_label(invite: &WishlistRef) -> String {
    invite
        .name()
        .map_or_else(|| format!("Wishlist {}", invite.id()), str::to_owned)
}

fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Dashboard page — wishlist grid, create form, invites, notifications.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = PageContext::from_context();
    let wishlists = RwSignal::new(Vec::<Wishlist>::new());
    let notifications = RwSignal::new(Vec::<Notification>::new());
    let invites = RwSignal::new(Vec::<WishlistRef>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);

    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    Effect::new({
        let ctx = ctx.clone();
        move || {
            reload.track();
            let ctx = ctx.clone();
            spawn(async move {
                loading.set(true);
                if ctx.settle(ctx.api.get_wishlists().await, wishlists, error)
                    && ctx.settle(ctx.api.get_notifications().await, notifications, error)
                {
                    ctx.settle(ctx.api.get_pending_invites().await, invites, error);
                }
                loading.set(false);
            });
        }
    });

    let on_create = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = match validate_wishlist_input(&new_name.get_untracked(), &new_description.get_untracked()) {
                Ok(input) => input,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            error.set(None);
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.create_wishlist(&input).await {
                    Ok(_) => {
                        new_name.set(String::new());
                        new_description.set(String::new());
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    let on_delete = Callback::new({
        let ctx = ctx.clone();
        move |id: String| {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.delete_wishlist(&id).await {
                    Ok(()) => reload.update(|n| *n += 1),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    });

    let on_accept = Callback::new({
        let ctx = ctx.clone();
        move |id: String| {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.accept_invite(&id).await {
                    Ok(()) => reload.update(|n| *n += 1),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    });

    let on_logout = {
        let ctx = ctx.clone();
        move |_: leptos::ev::MouseEvent| ctx.sign_out()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"My Wishlists"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__notifications">
                    {move || format!("🔔 {}", unread_count(&notifications.get()))}
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <form class="dashboard-page__create" on:submit=on_create>
                <input
                    class="dashboard-input"
                    type="text"
                    placeholder="New wishlist name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    class="dashboard-input"
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || new_description.get()
                    on:input=move |ev| new_description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"+ New Wishlist"</button>
            </form>

            <Show when=move || !invites.get().is_empty()>
                <section class="dashboard-page__invites">
                    <h2>"Pending invites"</h2>
                    <ul>
                        {move || {
                            invites
                                .get()
                                .into_iter()
                                .map(|invite| {
                                    let id = invite.id().to_owned();
                                    view! {
                                        <li class="invite">
                                            <span>{invite_label(&invite)}</span>
                                            <button class="btn" on:click=move |_| on_accept.run(id.clone())>
                                                "Accept"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>

            <Show
                when=move || !loading.get() || !wishlists.get().is_empty()
                fallback=|| view! { <p>"Loading wishlists..."</p> }
            >
                <div class="dashboard-page__cards">
                    {move || {
                        wishlists
                            .get()
                            .into_iter()
                            .map(|wishlist| view! { <WishlistCard wishlist=wishlist on_delete=on_delete/> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <section class="dashboard-page__notifications">
                <h2>"Notifications"</h2>
                <ul>
                    {move || {
                        notifications
                            .get()
                            .into_iter()
                            .map(|n| {
                                let unread = !n.read;
                                view! {
                                    <li class="notification" class:notification--unread=unread>
                                        {n.message}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
