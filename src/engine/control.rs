//! Stop control for an in-flight run.

use crate::automaton::{ConfigError, Dfa};
use parking_lot::Mutex;
use tokio::sync::oneshot;

#[derive(Default)]
struct SlotState {
    running: bool,
    sender: Option<oneshot::Sender<()>>,
}

/// Holds the stop signal of the run currently in flight, if any.
#[derive(Default)]
pub(crate) struct StopSlot {
    inner: Mutex<SlotState>,
}

impl StopSlot {
    /// Mark a run as in flight and hand out the receiving end of its stop
    /// signal. The slot is released when the returned guard drops.
    pub(crate) fn arm(&self) -> Result<Armed<'_>, ConfigError> {
        let mut inner = self.inner.lock();
        if inner.running {
            return Err(ConfigError::AlreadyRunning);
        }
        let (sender, signal) = oneshot::channel();
        inner.running = true;
        inner.sender = Some(sender);
        Ok(Armed { slot: self, signal })
    }

    /// Fire the stop signal. Only the first call per run succeeds.
    pub(crate) fn fire(&self) -> Result<(), ConfigError> {
        let sender = {
            let mut inner = self.inner.lock();
            if !inner.running {
                return Err(ConfigError::NotRunning);
            }
            inner.sender.take().ok_or(ConfigError::NotRunning)?
        };
        sender.send(()).map_err(|_| ConfigError::NotRunning)
    }

    fn release(&self) {
        let mut inner = self.inner.lock();
        inner.running = false;
        inner.sender = None;
    }
}

/// Guard for an armed stop slot.
pub(crate) struct Armed<'a> {
    slot: &'a StopSlot,
    pub(crate) signal: oneshot::Receiver<()>,
}

impl Armed<'_> {
    /// Non-blocking check used between steps of a synchronous run.
    pub(crate) fn stopped(&mut self) -> bool {
        self.signal.try_recv().is_ok()
    }
}

impl Drop for Armed<'_> {
    fn drop(&mut self) {
        self.slot.release();
    }
}

impl Dfa {
    /// Cancel the run in flight by closing its letter feed.
    ///
    /// The driving loop finishes the run in the current state: accepted if
    /// that state is terminal, otherwise rejected with
    /// [`Rejection::Stopped`](crate::engine::Rejection::Stopped). A letter
    /// handed off by a computation after the stop is dropped.
    ///
    /// Stopping twice, or when no run is in flight, returns
    /// [`ConfigError::NotRunning`].
    pub fn stop(&self) -> Result<(), ConfigError> {
        self.stop_slot().fire()
    }
}
