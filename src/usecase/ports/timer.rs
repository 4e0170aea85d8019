use std::time::Duration;

/// Deferred execution on the UI event loop.
///
/// A scheduled task never runs synchronously inside `schedule`, even with a
/// zero delay: it runs on a later scheduling turn.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Discards a scheduled task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
