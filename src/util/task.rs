//! Fire-and-forget async work on the browser event loop.

use std::future::Future;

/// Spawn `fut` on the local executor. Outside the browser there is no
/// executor, so the future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
