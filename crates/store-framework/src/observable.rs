//! # Observable Values
//!
//! A store that caches data in memory keeps it in an [`Observable`]. The value is read
//! synchronously, replaced only through [`Observable::set`], and every replacement is
//! announced to subscribers. Nothing invalidates it behind the owner's back.
//!
//! Internally this is a `tokio::sync::watch` channel, so readers on other threads see
//! a write atomically: either the old value or the new one, never a mix.

use tokio::sync::watch;

#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replace the value and wake every subscriber.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Receiver that is notified on each `set`. Slow receivers only see the latest value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
