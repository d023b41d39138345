//! # Network Status
//!
//! The network monitor turns platform connectivity events into a single observable
//! boolean. It follows the same split as the rest of the framework: a *writer* half
//! ([`NetworkMonitor`]) that owns the state and consumes events, and a cloneable
//! *reader* half ([`NetworkStatus`]) handed to every consumer.
//!
//! ## Guarantees
//!
//! - Each event updates the state synchronously inside [`NetworkMonitor::apply`]; a
//!   reader calling [`NetworkStatus::is_online`] right after sees the new value.
//! - Subscribers from [`NetworkStatus::subscribe`] receive every event's resulting
//!   value in the order the events arrived. Nothing is merged.
//! - Readers cannot write. Only the monitor mutates the state.
//!
//! The monitor does not gate, queue or retry anything. What to do while offline is the
//! caller's decision.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! let bridge = ConnectivityBridge::new(true);
//! let (status, handle) = NetworkMonitor::spawn(&bridge, 16);
//!
//! // Platform glue reports changes:
//! bridge.report(ConnectivityEvent::Offline);
//! ```

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A connectivity change reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

impl ConnectivityEvent {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectivityEvent::Online)
    }
}

/// Where the monitor gets its initial state and subsequent events from.
pub trait ConnectivitySource {
    /// The platform's current connectivity signal.
    fn is_online(&self) -> bool;

    /// A stream of connectivity changes, open for as long as the source lives.
    fn events(&self) -> mpsc::UnboundedReceiver<ConnectivityEvent>;
}

/// The writer half. Owns the boolean and applies connectivity events to it.
#[derive(Debug)]
pub struct NetworkMonitor {
    state: watch::Sender<bool>,
    transitions: broadcast::Sender<bool>,
}

impl NetworkMonitor {
    /// Creates a monitor and its first reader handle.
    ///
    /// `capacity` bounds how many transitions a lagging subscriber may fall behind.
    pub fn new(initially_online: bool, capacity: usize) -> (Self, NetworkStatus) {
        let (state, receiver) = watch::channel(initially_online);
        let (transitions, _) = broadcast::channel(capacity.max(1));
        let status = NetworkStatus {
            state: receiver,
            transitions: transitions.subscribe(),
        };
        (Self { state, transitions }, status)
    }

    /// Initializes from `source`, then runs the event loop on a background task.
    pub fn spawn(
        source: &impl ConnectivitySource,
        capacity: usize,
    ) -> (NetworkStatus, JoinHandle<()>) {
        // Register before reading the current signal, so a change reported in between
        // is still delivered as an event.
        let events = source.events();
        let (monitor, status) = Self::new(source.is_online(), capacity);
        let handle = tokio::spawn(monitor.run(events));
        (status, handle)
    }

    /// Applies one event and returns the resulting state.
    pub fn apply(&self, event: ConnectivityEvent) -> bool {
        let online = event.is_online();
        self.state.send_replace(online);
        // No subscribers is fine: the state above is still updated.
        let _ = self.transitions.send(online);
        debug!(online, "Connectivity changed");
        online
    }

    /// Consumes events until the channel closes.
    pub async fn run(self, mut events: mpsc::UnboundedReceiver<ConnectivityEvent>) {
        info!(online = *self.state.borrow(), "Network monitor started");
        while let Some(event) = events.recv().await {
            self.apply(event);
        }
        info!(online = *self.state.borrow(), "Network monitor stopped");
    }
}

/// The reader half. Cheap to clone, cannot mutate.
///
/// Holds no sender, so once the monitor is dropped both [`changed`](Self::changed) and
/// the receivers from [`subscribe`](Self::subscribe) report the end.
#[derive(Debug)]
pub struct NetworkStatus {
    state: watch::Receiver<bool>,
    transitions: broadcast::Receiver<bool>,
}

impl Clone for NetworkStatus {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            transitions: self.transitions.resubscribe(),
        }
    }
}

impl NetworkStatus {
    pub fn is_online(&self) -> bool {
        *self.state.borrow()
    }

    /// Every subsequent state, one message per connectivity event, in event order.
    pub fn subscribe(&self) -> broadcast::Receiver<bool> {
        self.transitions.resubscribe()
    }

    /// Waits until the state is written again and returns it.
    ///
    /// Returns `None` once the monitor is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.state.changed().await.ok()?;
        Some(*self.state.borrow_and_update())
    }
}

/// A [`ConnectivitySource`] that platform glue (or a test) pushes events into.
#[derive(Debug)]
pub struct ConnectivityBridge {
    online: watch::Sender<bool>,
    subscribers: std::sync::Mutex<Vec<mpsc::UnboundedSender<ConnectivityEvent>>>,
}

impl ConnectivityBridge {
    pub fn new(initially_online: bool) -> Self {
        let (online, _) = watch::channel(initially_online);
        Self {
            online,
            subscribers: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Report a connectivity change to every subscribed monitor.
    pub fn report(&self, event: ConnectivityEvent) {
        self.online.send_replace(event.is_online());
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event).is_ok());
    }

    /// Drop every subscription, which ends the monitors' event loops.
    pub fn close(&self) {
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }
}

impl ConnectivitySource for ConnectivityBridge {
    fn is_online(&self) -> bool {
        *self.online.borrow()
    }

    fn events(&self) -> mpsc::UnboundedReceiver<ConnectivityEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(tx);
        rx
    }
}
