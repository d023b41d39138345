//! # Debounced Actions
//!
//! [`Debounced`] wraps an action so that a burst of calls collapses into a single
//! delayed execution using the arguments of the last call.
//!
//! ## Timing
//!
//! Each [`Debounced::call`] aborts the timer left by the previous call (if it has not
//! fired yet) and starts a new one. Only when a full `delay` passes without another call
//! does the action run. A delay of zero still defers the action to a spawned task.
//!
//! ```text
//! call(1) ──┐
//! call(2) ──┼─ abort, abort
//! call(3) ──┴──────── delay ────────▶ action(3)
//! ```
//!
//! ## What is never cancelled
//!
//! Once the timer fires, the action is detached onto its own task. A later call only
//! replaces *scheduled* work; an action that is already running (for example a request
//! it dispatched to the API) runs to completion. A panic inside the action stays on
//! that task and never reaches the code that called `call`.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

type Action<A> = Arc<dyn Fn(A) -> BoxFuture<'static, ()> + Send + Sync>;

/// A callable that coalesces rapid invocations into one delayed execution.
///
/// Must be used from within a Tokio runtime.
pub struct Debounced<A> {
    delay: Duration,
    action: Action<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debounced<A> {
    /// Wrap an async action.
    pub fn new<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            action: Arc::new(move |args: A| action(args).boxed()),
            pending: Mutex::new(None),
        }
    }

    /// Wrap a synchronous closure.
    pub fn from_fn<F>(delay: Duration, f: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self::new(delay, move |args: A| {
            let f = f.clone();
            async move { f(args) }
        })
    }

    /// Schedule the action with `args`, replacing any execution that has not fired yet.
    pub fn call(&self, args: A) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                trace!("Replacing pending execution");
            }
            previous.abort();
        }

        let action = self.action.clone();
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(action(args));
        }));
    }

    /// Drop the scheduled execution, if any. Running actions are not affected.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// Whether an execution is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A> std::fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{sleep, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_still_deferred() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debounced = Debounced::from_fn(Duration::ZERO, move |v: u32| {
            let _ = tx.send(v);
        });

        debounced.call(1);
        assert!(rx.try_recv().is_err(), "action must not run inline");

        sleep(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_scheduled_execution() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debounced = Debounced::from_fn(Duration::from_millis(50), move |v: u32| {
            let _ = tx.send(v);
        });

        debounced.call(1);
        assert!(debounced.is_pending());
        debounced.cancel();
        assert!(!debounced.is_pending());

        sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_call_does_not_cancel_running_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debounced = Debounced::new(Duration::from_millis(10), move |v: u32| {
            let tx = tx.clone();
            async move {
                // Simulates a request already on the wire.
                sleep(Duration::from_millis(100)).await;
                let _ = tx.send((v, Instant::now()));
            }
        });

        debounced.call(1);
        sleep(Duration::from_millis(20)).await;
        // The first action is now in flight; this only schedules a second one.
        debounced.call(2);

        sleep(Duration::from_millis(300)).await;
        let mut seen = Vec::new();
        while let Ok((v, _)) = rx.try_recv() {
            seen.push(v);
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_action_stays_on_its_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debounced = Debounced::from_fn(Duration::from_millis(10), move |v: u32| {
            if v == 1 {
                panic!("action failed");
            }
            let _ = tx.send(v);
        });

        debounced.call(1);
        sleep(Duration::from_millis(50)).await;
        assert!(!debounced.is_pending());

        debounced.call(2);
        sleep(Duration::from_millis(50)).await;
        assert_eq!(rx.recv().await, Some(2));
    }
}
