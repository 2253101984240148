//! Dashboard card for a single wishlist.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Wishlist;
use crate::routing::wishlist_path;

/// A clickable card linking to the wishlist detail view.
#[component]
pub fn WishlistCard(wishlist: Wishlist, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = wishlist_path(&wishlist.id);
    let product_count = wishlist.products.len();
    let member_count = wishlist.members.len();
    let id = wishlist.id.clone();

    view! {
        <div class="wishlist-card">
            <A href=href>
                <span class="wishlist-card__name">{wishlist.name}</span>
            </A>
            {wishlist.description.map(|d| view! { <p class="wishlist-card__description">{d}</p> })}
            <span class="wishlist-card__meta">
                {format!("{product_count} products · {member_count} members")}
            </span>
            {on_delete.map(|on_delete| {
                view! {
                    <button
                        class="wishlist-card__delete"
                        title="Delete wishlist"
                        aria-label="Delete wishlist"
                        on:click=move |_| on_delete.run(id.clone())
                    >
                        "✕"
                    </button>
                }
            })}
        </div>
    }
}
