//! Wire DTOs for the wishlist backend.
//!
//! DESIGN
//! ======
//! The backend emits camelCase JSON with Mongo-style `_id` keys, and may send a
//! related record either as a bare id or populated inline. Reference fields use
//! untagged enums so both shapes decode, and collections default to empty so
//! partial payloads never fail the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Preferred display name: username, then email, then id.
    pub fn label(&self) -> &str {
        [self.username.as_str(), self.email.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(self.id.as_str())
    }
}

/// A user referenced by id or populated inline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User(User),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => user.label(),
        }
    }
}

/// A comment on a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An emoji reaction on a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// A product inside a wishlist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub added_by: Option<UserRef>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Product {
    /// Reaction counts grouped by emoji, in first-seen order.
    pub fn reaction_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for reaction in &self.reactions {
            match counts.iter_mut().find(|(emoji, _)| *emoji == reaction.emoji) {
                Some((_, n)) => *n += 1,
                None => counts.push((reaction.emoji.clone(), 1)),
            }
        }
        counts
    }
}

/// A named collection of products, possibly shared with members.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub members: Vec<UserRef>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A wishlist referenced by id or populated inline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WishlistRef {
    Id(String),
    Wishlist(Box<Wishlist>),
}

impl WishlistRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Wishlist(w) => &w.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Wishlist(w) => Some(w.name.as_str()).filter(|n| !n.is_empty()),
        }
    }
}

/// A notification addressed to the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The signed-in user's profile as returned by `/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub pending_invites: Vec<WishlistRef>,
}

/// Body of a successful login or registration.
///
/// Registration may answer without a token; it then decodes as empty and the
/// caller asks the user to sign in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create/update payload for a wishlist.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WishlistInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create/update payload for a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentInput {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReactionInput {
    pub emoji: String,
}

/// Invitation payload; at least one field identifies the invitee.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Lookup criteria for `find-user`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub email: Option<String>,
    pub username: Option<String>,
}
