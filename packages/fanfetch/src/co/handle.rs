use tokio::task::{AbortHandle, JoinError, JoinHandle};

use super::{co_util, runtime};

/// Join handle for async task
///
/// This is a wrapper around `tokio`'s `JoinHandle` type, that turns
/// panics and aborts into errors when joined.
pub struct Handle<T>(pub(crate) JoinHandle<T>);
impl<T> Handle<T> {
    /// Abort the task, trying to `join` or `co_join` an aborted
    /// task (if it's not already completed) will return an error indicating
    /// it's already aborted.
    pub fn abort(&self) {
        self.0.abort();
    }

    /// Return a handle to remotely abort the task
    pub fn abort_handle(&self) -> AbortHandle {
        self.0.abort_handle()
    }

    /// Check if the task is finished, without joining it
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    /// Block the current thread to join the task
    ///
    /// Will error if the task was aborted or panicked.
    ///
    /// # Blocking
    /// **Do not use this in an async context**, since it will
    /// block the runtime. Use [`co_join().await`](`Self::co_join`) instead.
    #[inline]
    pub fn join(self) -> crate::Result<T> {
        Self::handle_error(runtime::event_loop().block_on(self.0))
    }

    /// Wait for the task asynchronously
    ///
    /// Will error if the task was aborted or panicked.
    /// If you want to handle the abort, use [`co_join_maybe_aborted`](Self::co_join_maybe_aborted)
    #[inline]
    pub async fn co_join(self) -> crate::Result<T> {
        Self::handle_error(self.0.await)
    }

    /// Like [`co_join`](Self::co_join), but returns `None` if the task was aborted.
    #[inline]
    pub async fn co_join_maybe_aborted(self) -> crate::Result<Option<T>> {
        Self::handle_error_maybe_aborted(self.0.await)
    }

    #[inline]
    fn handle_error(e: Result<T, JoinError>) -> crate::Result<T> {
        match Self::handle_error_maybe_aborted(e) {
            Ok(Some(x)) => Ok(x),
            Ok(None) => crate::bail!("aborted"),
            Err(e) => Err(e),
        }
    }

    fn handle_error_maybe_aborted(e: Result<T, JoinError>) -> crate::Result<Option<T>> {
        let e = match e {
            Ok(x) => return Ok(Some(x)),
            Err(e) => e,
        };
        co_util::check_join_error(e)?;
        Ok(None)
    }
}
