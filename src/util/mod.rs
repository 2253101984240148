//! Browser-environment helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys`/executor glue out of pages so they read the same in native
//! test builds and in the browser.

pub mod storage_events;
pub mod task;
