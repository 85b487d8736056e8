//! Publish-subscribe value cell.
//!
//! # Design
//! `StateCell` stores the current value and broadcasts every `set` to the
//! receivers that exist at that moment. Updates are never coalesced, so a
//! subscriber sees each intermediate value in order. The broadcast happens
//! under the write lock, which keeps the notification order identical to
//! the order in which values were stored.

use parking_lot::RwLock;
use tokio::sync::broadcast;

/// Updates a receiver may fall behind by before it starts lagging.
const UPDATE_BUFFER: usize = 64;

#[derive(Debug)]
pub struct StateCell<T> {
    current: RwLock<T>,
    updates: broadcast::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_BUFFER);
        Self {
            current: RwLock::new(initial),
            updates,
        }
    }

    pub fn get(&self) -> T {
        self.current.read().clone()
    }

    /// Store `value` and notify current subscribers.
    pub fn set(&self, value: T) {
        let mut current = self.current.write();
        *current = value.clone();
        // No subscribers is fine.
        let _ = self.updates.send(value);
    }

    /// Receiver for every value set from now on. The current value is not replayed.
    ///
    /// A receiver that falls more than `UPDATE_BUFFER` (64) updates behind
    /// gets `RecvError::Lagged` and loses the oldest values, so it may miss
    /// a `Loading` it never read. Drain promptly, or fall back to `get()`.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.updates.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }
}

impl<T: Clone + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
