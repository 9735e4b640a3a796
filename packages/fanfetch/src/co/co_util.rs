use tokio::task::JoinError;

/// Turn a failed join into an error.
///
/// `Ok` if the task was cancelled, since an abort is not always a failure.
pub(crate) fn check_join_error(e: JoinError) -> crate::Result<()> {
    if e.is_cancelled() {
        return Ok(());
    }
    match e.try_into_panic() {
        Ok(payload) => crate::bail!("task panicked: {}", crate::panic_message(payload.as_ref())),
        Err(e) => crate::bail!("failed to join task: {e}"),
    }
}
