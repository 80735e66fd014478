//! # Callback-to-Async Bridge
//!
//! Turns one callback-style SDK call into one awaited value, with
//! cancellation wired through the SDK's operation handle.
//!
//! ## How Cancellation Propagates
//! ```text
//! consumer future dropped
//!      │  (synchronously, as part of the drop)
//!      ▼
//! CancelGuard::drop
//!      │  handle.is_completed()?  ── yes ──► no-op (callback already fired)
//!      ▼  no
//! handle.cancel()  ──► hardware operation aborted
//! ```
//!
//! The `is_completed()` check closes the race between "callback fired" and
//! "consumer cancelled": a settled handle is never cancelled.

use tokio::sync::oneshot;

use crate::error::TerminalError;
use crate::sdk::CancelableHandle;
use crate::types::ActionStatus;

/// Owns the in-flight handle for the duration of one awaited SDK call.
///
/// Dropping an armed guard cancels the operation unless the SDK already
/// completed it. The guard is defused once a result has been received.
struct CancelGuard {
    handle: Option<Box<dyn CancelableHandle>>,
}

impl CancelGuard {
    fn new(handle: Box<dyn CancelableHandle>) -> Self {
        CancelGuard {
            handle: Some(handle),
        }
    }

    /// Disarms the guard after the terminal value has been received.
    fn defuse(&mut self) {
        self.handle = None;
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_completed() {
                handle.cancel();
            }
        }
    }
}

/// Issues one SDK call and awaits its single terminal value.
///
/// `issue` receives the oneshot sender the SDK callback must resolve and
/// returns the SDK's cancelable handle. If the consuming future is dropped
/// before the callback fires, the still-incomplete handle is cancelled
/// before cancellation propagates outward. A callback dropped without a
/// result settles the action with [`TerminalError::CallbackDropped`].
pub(crate) async fn run_cancelable<T, F>(issue: F) -> ActionStatus<T>
where
    F: FnOnce(oneshot::Sender<ActionStatus<T>>) -> Box<dyn CancelableHandle>,
{
    let (result_tx, result_rx) = oneshot::channel();
    let mut guard = CancelGuard::new(issue(result_tx));

    let status = match result_rx.await {
        Ok(status) => status,
        Err(_dropped) => ActionStatus::Failure(TerminalError::CallbackDropped),
    };

    guard.defuse();
    status
}

// =============================================================================
// Unit Tests
// =============================================================================
