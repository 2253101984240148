//! Wishlist detail page: products, comments, reactions, and membership.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{PageContext, non_empty};
use crate::components::product_card::ProductCard;
use crate::net::error::ErrorCategory;
use crate::net::types::{InviteInput, Product, ProductInput, User, UserQuery, Wishlist, WishlistInput};
use crate::routing::DASHBOARD_PATH;
use crate::util::task::spawn;

fn parse_price(raw: &str) -> Result<Option<f64>, &'static str> {
    let Some(value) = non_empty(raw) else {
        return Ok(None);
    };
    match value.trim_start_matches('$').trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err("Price must be a non-negative number."),
    }
}

fn validate_product_input(name: &str, image_url: &str, price: &str) -> Result<ProductInput, &'static str> {
    let name = non_empty(name).ok_or("Give the product a name.")?;
    Ok(ProductInput { name, image_url: non_empty(image_url), price: parse_price(price)? })
}

/// Form field values (name, image URL, price) for editing `product`.
fn product_form_values(product: &Product) -> (String, String, String) {
    (
        product.name.clone(),
        product.image_url.clone().unwrap_or_default(),
        product.price.map(|p| p.to_string()).unwrap_or_default(),
    )
}

/// Input containing `@` is treated as an email, anything else as a username.
fn parse_user_lookup(input: &str) -> Result<UserQuery, &'static str> {
    let value = non_empty(input).ok_or("Enter an email or username.")?;
    if value.contains('@') {
        Ok(UserQuery { email: Some(value), username: None })
    } else {
        Ok(UserQuery { email: None, username: Some(value) })
    }
}

fn invite_for(user: &User) -> InviteInput {
    InviteInput { user_id: non_empty(&user.id), email: non_empty(&user.email), username: None }
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    let ctx = PageContext::from_context();
    let navigate = use_navigate();
    let params = use_params_map();
    let wishlist_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let wishlist = RwSignal::new(None::<Wishlist>);
    let products = RwSignal::new(Vec::<Product>::new());
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let products_reload = RwSignal::new(0_u64);

    // Product form (add or edit).
    let product_name = RwSignal::new(String::new());
    let product_image = RwSignal::new(String::new());
    let product_price = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<String>);

    let rename = RwSignal::new(String::new());

    // Invite panel.
    let lookup = RwSignal::new(String::new());
    let found = RwSignal::new(None::<User>);
    let invite_info = RwSignal::new(None::<String>);
    let known_users = RwSignal::new(Vec::<User>::new());

    Effect::new({
        let ctx = ctx.clone();
        move || {
            let id = wishlist_id.get();
            reload.track();
            if id.is_empty() {
                return;
            }
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.get_wishlist(&id).await {
                    Ok(loaded) => {
                        rename.set(loaded.name.clone());
                        products.set(loaded.products.clone());
                        wishlist.set(Some(loaded));
                    }
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    });

    // Product edits, comments and reactions only re-fetch the product list.
    Effect::new({
        let ctx = ctx.clone();
        move || {
            let round = products_reload.get();
            let id = wishlist_id.get_untracked();
            if round == 0 || id.is_empty() {
                return;
            }
            let ctx = ctx.clone();
            spawn(async move {
                ctx.settle(ctx.api.get_products(&id).await, products, error);
            });
        }
    });

    Effect::new({
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.get_all_users().await {
                    Ok(users) => known_users.set(users),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    });

    let reset_product_form = move || {
        product_name.set(String::new());
        product_image.set(String::new());
        product_price.set(String::new());
        editing.set(None);
    };

    let on_save_product = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = match validate_product_input(
                &product_name.get_untracked(),
                &product_image.get_untracked(),
                &product_price.get_untracked(),
            ) {
                Ok(input) => input,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            error.set(None);
            let ctx = ctx.clone();
            let id = wishlist_id.get_untracked();
            let target = editing.get_untracked();
            spawn(async move {
                let result = match target {
                    Some(product_id) => ctx.api.update_product(&id, &product_id, &input).await,
                    None => ctx.api.add_product(&id, &input).await,
                };
                match result {
                    Ok(()) => {
                        reset_product_form();
                        products_reload.update(|n| *n += 1);
                    }
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    let on_changed = Callback::new(move |()| products_reload.update(|n| *n += 1));
    let on_edit = Callback::new(move |product: Product| {
        let (name, image, price) = product_form_values(&product);
        product_name.set(name);
        product_image.set(image);
        product_price.set(price);
        editing.set(Some(product.id));
    });

    let on_rename = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(name) = non_empty(&rename.get_untracked()) else {
                error.set(Some("Give the wishlist a name.".to_owned()));
                return;
            };
            let description = wishlist.get_untracked().and_then(|w| w.description);
            let input = WishlistInput { name, description };
            let ctx = ctx.clone();
            let id = wishlist_id.get_untracked();
            spawn(async move {
                match ctx.api.update_wishlist(&id, &input).await {
                    Ok(_) => reload.update(|n| *n += 1),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    let on_find = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let query = match parse_user_lookup(&lookup.get_untracked()) {
                Ok(query) => query,
                Err(msg) => {
                    invite_info.set(Some(msg.to_owned()));
                    return;
                }
            };
            found.set(None);
            invite_info.set(None);
            let ctx = ctx.clone();
            spawn(async move {
                match ctx.api.find_user(&query).await {
                    Ok(user) => found.set(Some(user)),
                    Err(e) if e.category() == ErrorCategory::NotFound => {
                        invite_info.set(Some("No user found.".to_owned()));
                    }
                    Err(e) => ctx.report(&e, invite_info),
                }
            });
        }
    };

    let on_invite = {
        let ctx = ctx.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(user) = found.get_untracked() else {
                return;
            };
            let ctx = ctx.clone();
            let id = wishlist_id.get_untracked();
            spawn(async move {
                match ctx.api.invite_member(&id, &invite_for(&user)).await {
                    Ok(()) => {
                        invite_info.set(Some(format!("Invitation sent to {}.", user.label())));
                        found.set(None);
                        lookup.set(String::new());
                    }
                    Err(e) => ctx.report(&e, invite_info),
                }
            });
        }
    };

    let on_leave = {
        let ctx = ctx.clone();
        move |_: leptos::ev::MouseEvent| {
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            let id = wishlist_id.get_untracked();
            spawn(async move {
                match ctx.api.leave_wishlist(&id).await {
                    Ok(()) => navigate(DASHBOARD_PATH, NavigateOptions::default()),
                    Err(e) => ctx.report(&e, error),
                }
            });
        }
    };

    view! {
        <div class="wishlist-page">
            <header class="wishlist-page__header toolbar">
                <A href=DASHBOARD_PATH>"← Wishlists"</A>
                <span class="toolbar__title">
                    {move || wishlist.get().map(|w| w.name).unwrap_or_else(|| "Loading...".to_owned())}
                </span>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--danger" on:click=on_leave>"Leave wishlist"</button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="wishlist-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                wishlist
                    .get()
                    .map(|w| {
                        let members = w.members.iter().map(|m| m.label().to_owned()).collect::<Vec<_>>().join(", ");
                        view! {
                            <section class="wishlist-page__summary">
                                {w.description.map(|d| view! { <p>{d}</p> })}
                                <p class="wishlist-page__members">"Members: " {members}</p>
                            </section>
                        }
                    })
            }}

            <form class="wishlist-page__rename" on:submit=on_rename>
                <input
                    class="wishlist-input"
                    type="text"
                    prop:value=move || rename.get()
                    on:input=move |ev| rename.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Rename"</button>
            </form>

            <form class="wishlist-page__product-form" on:submit=on_save_product>
                <input
                    class="wishlist-input"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || product_name.get()
                    on:input=move |ev| product_name.set(event_target_value(&ev))
                />
                <input
                    class="wishlist-input"
                    type="url"
                    placeholder="Image URL (optional)"
                    prop:value=move || product_image.get()
                    on:input=move |ev| product_image.set(event_target_value(&ev))
                />
                <input
                    class="wishlist-input"
                    type="text"
                    inputmode="decimal"
                    placeholder="Price (optional)"
                    prop:value=move || product_price.get()
                    on:input=move |ev| product_price.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    {move || if editing.get().is_some() { "Save product" } else { "+ Add product" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" type="button" on:click=move |_| reset_product_form()>
                        "Cancel"
                    </button>
                </Show>
            </form>

            <div class="wishlist-page__products">
                {move || {
                    let id = wishlist_id.get();
                    products
                        .get()
                        .into_iter()
                        .map(|product| {
                            view! {
                                <ProductCard
                                    wishlist_id={id.clone()}
                                    product=product
                                    on_changed=on_changed
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <section class="wishlist-page__invite">
                <h2>"Invite a friend"</h2>
                <form on:submit=on_find>
                    <input
                        class="wishlist-input"
                        type="text"
                        list="known-users"
                        placeholder="Email or username"
                        prop:value=move || lookup.get()
                        on:input=move |ev| lookup.set(event_target_value(&ev))
                    />
                    <datalist id="known-users">
                        {move || {
                            known_users
                                .get()
                                .into_iter()
                                .map(|u| view! { <option value={u.label().to_owned()}></option> })
                                .collect_view()
                        }}
                    </datalist>
                    <button class="btn" type="submit">"Find"</button>
                </form>
                <Show when=move || found.get().is_some()>
                    <p class="wishlist-page__found">
                        {move || found.get().map(|u| u.label().to_owned()).unwrap_or_default()}
                        <button class="btn btn--primary" on:click={on_invite.clone()}>"Invite"</button>
                    </p>
                </Show>
                <Show when=move || invite_info.get().is_some()>
                    <p class="wishlist-page__info">{move || invite_info.get().unwrap_or_default()}</p>
                </Show>
            </section>
        </div>
    }
}
