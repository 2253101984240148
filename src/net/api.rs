//! HTTP client for the wishlist backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`ApiError::Unavailable`], but request
//! preparation still runs so URL and header logic stays testable.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient::prepare`] is the single interception point: it reads the
//! session token immediately before transmission and attaches
//! `Authorization: Bearer <token>` when one is present. No endpoint sets
//! headers on its own.
//!
//! ERROR HANDLING
//! ==============
//! No retries, timeouts, or caching. Every failure is returned to the caller
//! as an [`ApiError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::endpoints;
use super::error::ApiError;
use super::request::{ApiRequest, PreparedRequest, build_url};
use super::types::{
    AuthResponse, CommentInput, InviteInput, LoginRequest, Notification, Product, ProductInput,
    Profile, ReactionInput, RegisterRequest, User, UserQuery, Wishlist, WishlistInput, WishlistRef,
};
use crate::state::session::Session;

/// Shared, cloneable API client provided through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

/// Format a bearer `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decode a success body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, session }
    }

    /// Client for the backend configured at build time.
    pub fn from_env(session: Session) -> Self {
        Self { base_url: crate::config::api_base_url(), session }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolve `request` against the base URL and current session.
    pub fn prepare(&self, request: ApiRequest) -> PreparedRequest {
        let mut headers = Vec::new();
        if let Some(token) = self.session.token() {
            headers.push(("Authorization", bearer(&token)));
        }
        let body = request.body.map(|value| value.to_string());
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        PreparedRequest {
            method: request.method,
            url: build_url(&self.base_url, &request.path, &request.query),
            headers,
            body,
        }
    }

    /// Transmit `request` and return the raw body of a success response.
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let prepared = self.prepare(request);
        #[cfg(feature = "csr")]
        {
            transmit(prepared).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prepared;
            Err(ApiError::Unavailable)
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let text = self.execute(request).await?;
        decode_body(&text)
    }

    async fn send_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn register(&self, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send(endpoints::register(body)?).await
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send(endpoints::login(body)?).await
    }

    /// `GET /auth/find-user?email=&username=`
    ///
    /// # Errors
    ///
    /// Returns a 404 status error when no user matches.
    pub async fn find_user(&self, query: &UserQuery) -> Result<User, ApiError> {
        self.send(endpoints::find_user(query)).await
    }

    /// `GET /auth/all-users`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.send(endpoints::all_users()).await
    }

    /// `GET /auth/notifications`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.send(endpoints::notifications()).await
    }

    /// `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        self.send(endpoints::me()).await
    }

    /// Pending wishlist invites, read from the `/auth/me` profile.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_pending_invites(&self) -> Result<Vec<WishlistRef>, ApiError> {
        self.me().await.map(|profile| profile.pending_invites)
    }

    // =============================================================
    // Wishlists
    // =============================================================

    /// `GET /wishlists`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_wishlists(&self) -> Result<Vec<Wishlist>, ApiError> {
        self.send(endpoints::list_wishlists()).await
    }

    /// `GET /wishlists/:id`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_wishlist(&self, id: &str) -> Result<Wishlist, ApiError> {
        self.send(endpoints::get_wishlist(id)).await
    }

    /// Products of a wishlist; the backend populates them on the wishlist itself.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn get_products(&self, wishlist_id: &str) -> Result<Vec<Product>, ApiError> {
        self.get_wishlist(wishlist_id).await.map(|w| w.products)
    }

    /// `POST /wishlists`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn create_wishlist(&self, body: &WishlistInput) -> Result<Wishlist, ApiError> {
        self.send(endpoints::create_wishlist(body)?).await
    }

    /// `PUT /wishlists/:id`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn update_wishlist(&self, id: &str, body: &WishlistInput) -> Result<Wishlist, ApiError> {
        self.send(endpoints::update_wishlist(id, body)?).await
    }

    /// `DELETE /wishlists/:id`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn delete_wishlist(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(endpoints::delete_wishlist(id)).await
    }

    /// `POST /wishlists/:id/invite`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn invite_member(&self, id: &str, body: &InviteInput) -> Result<(), ApiError> {
        self.send_unit(endpoints::invite_member(id, body)?).await
    }

    /// `POST /wishlists/:id/leave`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn leave_wishlist(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(endpoints::leave_wishlist(id)?).await
    }

    /// `POST /wishlists/:id/accept-invite`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn accept_invite(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(endpoints::accept_invite(id)).await
    }

    // =============================================================
    // Products
    // =============================================================

    /// `POST /wishlists/:id/products`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn add_product(&self, wishlist_id: &str, body: &ProductInput) -> Result<(), ApiError> {
        self.send_unit(endpoints::add_product(wishlist_id, body)?).await
    }

    /// `PUT /wishlists/:id/products/:pid`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn update_product(
        &self,
        wishlist_id: &str,
        product_id: &str,
        body: &ProductInput,
    ) -> Result<(), ApiError> {
        self.send_unit(endpoints::update_product(wishlist_id, product_id, body)?).await
    }

    /// `DELETE /wishlists/:id/products/:pid`
    ///
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn delete_product(&self, wishlist_id: &str, product_id: &str) -> Result<(), ApiError> {
        self.send_unit(endpoints::delete_product(wishlist_id, product_id)).await
    }

    /// `POST /wishlists/:id/products/:pid/comments`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn add_comment(
        &self,
        wishlist_id: &str,
        product_id: &str,
        body: &CommentInput,
    ) -> Result<(), ApiError> {
        self.send_unit(endpoints::add_comment(wishlist_id, product_id, body)?).await
    }

    /// `POST /wishlists/:id/products/:pid/reactions`
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from encoding, transport, or the backend.
    pub async fn add_reaction(
        &self,
        wishlist_id: &str,
        product_id: &str,
        body: &ReactionInput,
    ) -> Result<(), ApiError> {
        self.send_unit(endpoints::add_reaction(wishlist_id, product_id, body)?).await
    }
}

#[cfg(feature = "csr")]
async fn transmit(prepared: PreparedRequest) -> Result<String, ApiError> {
    use super::request::Method;
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let method = match prepared.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Delete => HttpMethod::DELETE,
    };
    log::debug!("{} {}", prepared.method, prepared.url);

    let mut builder = RequestBuilder::new(&prepared.url).method(method);
    for (name, value) in &prepared.headers {
        builder = builder.header(name, value);
    }
    let request = match prepared.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| {
        log::warn!("{} {} unreachable: {e}", prepared.method, prepared.url);
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let err = ApiError::from_response(status, &text);
        log::warn!("{} {} failed: {err}", prepared.method, prepared.url);
        return Err(err);
    }
    Ok(text)
}
