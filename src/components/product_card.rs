//! Product row with comments and reactions.
//!
//! DESIGN
//! ======
//! The card issues its own comment/reaction/delete calls and reports back via
//! `on_changed`; the owning page then re-fetches the wishlist instead of
//! patching a local copy.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::{CommentInput, Product, ReactionInput};
use crate::pages::{PageContext, non_empty};
use crate::util::task::spawn;

/// Emoji offered as one-click reactions.
pub const REACTION_EMOJIS: [&str; 5] = ["❤️", "👍", "🎉", "😂", "😮"];

fn format_price(price: Option<f64>) -> Option<String> {
    price.filter(|p| p.is_finite()).map(|p| format!("${p:.2}"))
}

fn validate_comment(text: &str) -> Result<CommentInput, &'static str> {
    non_empty(text).map(|text| CommentInput { text }).ok_or("Write a comment first.")
}

#[component]
pub fn ProductCard(
    wishlist_id: String,
    product: Product,
    on_changed: Callback<()>,
    on_edit: Callback<Product>,
) -> impl IntoView {
    let ctx = PageContext::from_context();
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());
    let product_id = product.id.clone();
    let counts = product.reaction_counts();

    let on_react = Callback::new({
        let ctx = ctx.clone();
        let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
        move |emoji: &'static str| {
            let ctx = ctx.clone();
            let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
            spawn(async move {
                let body = ReactionInput { emoji: emoji.to_owned() };
                match ctx.api.add_reaction(&wishlist_id, &product_id, &body).await {
                    Ok(()) => on_changed.run(()),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    });

    let on_comment = {
        let ctx = ctx.clone();
        let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let body = match validate_comment(&draft.get_untracked()) {
                Ok(body) => body,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            error.set(None);
            let ctx = ctx.clone();
            let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
            spawn(async move {
                match ctx.api.add_comment(&wishlist_id, &product_id, &body).await {
                    Ok(()) => {
                        draft.set(String::new());
                        on_changed.run(());
                    }
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
        move |_: leptos::ev::MouseEvent| {
            let ctx = ctx.clone();
            let (wishlist_id, product_id) = (wishlist_id.clone(), product_id.clone());
            spawn(async move {
                match ctx.api.delete_product(&wishlist_id, &product_id).await {
                    Ok(()) => on_changed.run(()),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    let editable = product.clone();
    let Product { name, image_url, price, comments, .. } = product;

    view! {
        <article class="product-card">
            <header class="product-card__header">
                {image_url.map(|src| view! { <img class="product-card__image" src=src alt=""/> })}
                <span class="product-card__name">{name}</span>
                {format_price(price).map(|p| view! { <span class="product-card__price">{p}</span> })}
                <button class="btn" on:click=move |_| on_edit.run(editable.clone())>"Edit"</button>
                <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
            </header>
            <div class="product-card__reactions">
                {counts
                    .into_iter()
                    .map(|(emoji, n)| view! { <span class="reaction-count">{format!("{emoji} {n}")}</span> })
                    .collect_view()}
                {REACTION_EMOJIS
                    .iter()
                    .map(|&emoji| {
                        view! {
                            <button class="reaction-button" on:click=move |_| on_react.run(emoji)>
                                {emoji}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="product-card__comments">
                {comments
                    .into_iter()
                    .map(|c| {
                        let author = c.user.as_ref().map(|u| u.label().to_owned()).unwrap_or_default();
                        view! {
                            <li class="comment">
                                <span class="comment__author">{author}</span>
                                " "
                                <span class="comment__text">{c.text}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <form class="product-card__comment-form" on:submit=on_comment>
                <input
                    class="comment-input"
                    type="text"
                    placeholder="Add a comment"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Post"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="product-card__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
