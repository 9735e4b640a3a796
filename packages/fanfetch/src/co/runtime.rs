use std::sync::LazyLock;

use tokio::runtime::{Builder, Runtime};

use crate::co::Handle;

/// The event loop. Single-threaded, with the IO and timer drivers `reqwest` needs
static EVENT_LOOP: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .thread_name("fanfetch-event-loop")
        .build()
        .expect("cannot create current-thread tokio runtime")
});

pub(crate) fn event_loop() -> &'static Runtime {
    &EVENT_LOOP
}

/// Drive the event loop on the calling thread until `future` is done.
///
/// Tasks spawned with [`co_spawn`] from inside `future` run on the same thread,
/// taking turns whenever one of them is waiting on IO or a timer.
///
/// # Panics
/// Panics if called from inside an async runtime. `.await` the future instead.
#[inline(always)]
pub fn block<F>(future: F) -> F::Output
where
    F: Future,
{
    EVENT_LOOP.block_on(future)
}

/// Spawn a task onto the runtime of the current context
///
/// # Panics
/// Panics if not called inside a runtime
#[inline(always)]
pub fn co_spawn<F>(future: F) -> Handle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    Handle(tokio::spawn(future))
}
