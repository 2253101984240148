//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted token; `auth` derives the reactive flag from
//! it. Both are handed to components through context rather than looked up
//! globally.

pub mod auth;
pub mod session;
