//! Fire-and-forget async tasks for UI event handlers.

use std::future::Future;

/// Run `fut` on the browser's microtask queue.
///
/// Outside the browser build there is no executor; the future is dropped
/// unpolled so handlers still type-check in native tests.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
