//! Spawning UI futures.

use std::future::Future;

/// Run `fut` on the browser event loop.
///
/// Native builds have no event loop; the future is dropped unpolled.
pub fn spawn_ui<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
