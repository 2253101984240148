//! Cross-tab `storage` event subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers fire `storage` on every *other* tab when local storage changes, so
//! a logout in one tab flips the auth flag everywhere without a reload. The
//! listener is scoped to the current reactive owner and removed on cleanup.

#[cfg(feature = "csr")]
use leptos::prelude::*;

/// Run `on_change` whenever another tab mutates local storage.
///
/// Must be called inside a reactive owner (a component body). No-op outside
/// the browser build.
pub fn install_storage_listener<F>(on_change: F)
where
    F: Fn() + 'static,
{
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            log::debug!("storage changed: key={:?}", ev.key());
            on_change();
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
