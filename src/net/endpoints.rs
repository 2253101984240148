//! Request builders, one per backend endpoint.
//!
//! Each builder is pure: it maps typed arguments to an [`ApiRequest`] and does
//! not touch the network or the session. Ids are interpolated into paths as-is.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::error::ApiError;
use super::request::ApiRequest;
use super::types::{
    CommentInput, InviteInput, LoginRequest, ProductInput, ReactionInput, RegisterRequest,
    UserQuery, WishlistInput,
};

fn wishlist_path(id: &str) -> String {
    format!("/wishlists/{id}")
}

fn product_path(wishlist_id: &str, product_id: &str) -> String {
    format!("/wishlists/{wishlist_id}/products/{product_id}")
}

// =============================================================
// Auth
// =============================================================

pub fn register(body: &RegisterRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/auth/register").json(body)
}

pub fn login(body: &LoginRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/auth/login").json(body)
}

pub fn find_user(query: &UserQuery) -> ApiRequest {
    ApiRequest::get("/auth/find-user")
        .query("email", query.email.as_deref())
        .query("username", query.username.as_deref())
}

pub fn all_users() -> ApiRequest {
    ApiRequest::get("/auth/all-users")
}

pub fn notifications() -> ApiRequest {
    ApiRequest::get("/auth/notifications")
}

pub fn me() -> ApiRequest {
    ApiRequest::get("/auth/me")
}

// =============================================================
// Wishlists
// =============================================================

pub fn list_wishlists() -> ApiRequest {
    ApiRequest::get("/wishlists")
}

pub fn get_wishlist(id: &str) -> ApiRequest {
    ApiRequest::get(wishlist_path(id))
}

pub fn create_wishlist(body: &WishlistInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/wishlists").json(body)
}

pub fn update_wishlist(id: &str, body: &WishlistInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(wishlist_path(id)).json(body)
}

pub fn delete_wishlist(id: &str) -> ApiRequest {
    ApiRequest::delete(wishlist_path(id))
}

pub fn invite_member(id: &str, body: &InviteInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/invite", wishlist_path(id))).json(body)
}

/// Leave carries an empty JSON object as its body.
pub fn leave_wishlist(id: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/leave", wishlist_path(id))).json(&serde_json::json!({}))
}

/// Accept carries no body at all.
pub fn accept_invite(id: &str) -> ApiRequest {
    ApiRequest::post(format!("{}/accept-invite", wishlist_path(id)))
}

// =============================================================
// Products
// =============================================================

pub fn add_product(wishlist_id: &str, body: &ProductInput) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/products", wishlist_path(wishlist_id))).json(body)
}

pub fn update_product(
    wishlist_id: &str,
    product_id: &str,
    body: &ProductInput,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(product_path(wishlist_id, product_id)).json(body)
}

pub fn delete_product(wishlist_id: &str, product_id: &str) -> ApiRequest {
    ApiRequest::delete(product_path(wishlist_id, product_id))
}

pub fn add_comment(
    wishlist_id: &str,
    product_id: &str,
    body: &CommentInput,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/comments", product_path(wishlist_id, product_id))).json(body)
}

pub fn add_reaction(
    wishlist_id: &str,
    product_id: &str,
    body: &ReactionInput,
) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/reactions", product_path(wishlist_id, product_id))).json(body)
}
