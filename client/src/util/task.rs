//! Component-scoped async tasks.
//!
//! A task spawned from a component must not write into signals after the
//! component is gone. `spawn_until_cleanup` ties the task's lifetime to the
//! current reactive owner by aborting it from `on_cleanup`.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// Wrap `fut` so it can be cancelled. Resolves to `None` once aborted.
pub fn cancellable<F: Future>(fut: F) -> (impl Future<Output = Option<F::Output>>, AbortHandle) {
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fut, registration);
    (async move { task.await.ok() }, handle)
}

/// Spawn `fut` on the local executor and abort it when the owner is
/// cleaned up (component unmount).
pub fn spawn_until_cleanup<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = cancellable(fut);
    leptos::task::spawn_local(async move {
        let _ = task.await;
    });
    leptos::prelude::on_cleanup(move || handle.abort());
}
