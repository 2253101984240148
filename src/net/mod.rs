//! Networking modules for the wishlist REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes each call as data, `request` resolves it to a URL,
//! `api` attaches the session and transmits, `types` defines the wire schema,
//! and `error` classifies failures.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;
