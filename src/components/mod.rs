//! Reusable view components.

pub mod gate;
pub mod product_card;
pub mod wishlist_card;
