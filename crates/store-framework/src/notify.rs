//! # Notifications
//!
//! [`Notifier`] is the one outward-facing signal this layer gives the presentation
//! surface: "something succeeded / failed / deserves a warning / is worth knowing".
//! It decides severity and display duration; how a toast looks is up to whoever
//! subscribes.
//!
//! | Severity | Call | Duration |
//! |----------|------|----------|
//! | Success | [`Notifier::success`] | 3000 ms |
//! | Error | [`Notifier::error`] | 5000 ms |
//! | Warning | [`Notifier::warn`] | 4000 ms |
//! | Info | [`Notifier::info`] | 3000 ms |
//!
//! Emitting never fails. If no presentation layer is subscribed the event is dropped.

use std::time::Duration;
use tokio::sync::broadcast;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn default_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_millis(3000),
            Severity::Warning => Duration::from_millis(4000),
            Severity::Error => Duration::from_millis(5000),
        }
    }
}

/// One outbound notification event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

#[derive(Clone, Debug)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    /// `capacity` is how many events a slow subscriber may lag behind before losing some.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Attach a presentation layer.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Severity::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message);
    }

    pub fn emit(&self, severity: Severity, message: impl Into<String>) {
        let notification = Notification {
            severity,
            message: message.into(),
            duration: severity.default_duration(),
        };
        if self.sender.send(notification).is_err() {
            trace!(?severity, "No presentation layer attached, notification dropped");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
