//! Fan-out of written entity states to in-process watchers.
//!
//! The registry publishes one [`EntitySnapshot`] per successful state write.
//! Watchers (the daemon's logger, tests) each get their own receiver and see
//! writes in the order they happened. A watcher that falls more than
//! `capacity` writes behind loses the oldest ones and is told how many.

use tokio::sync::broadcast;

use aliste_domain::entity::EntitySnapshot;

use crate::ports::StatePublisher;

/// Broadcasts state writes to every current watcher.
pub struct InProcessStateBus {
    sender: broadcast::Sender<EntitySnapshot>,
}

impl InProcessStateBus {
    /// `capacity` is how many unread writes a watcher may lag behind.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Watch state writes from now on. Earlier writes are not replayed; read
    /// the registry for current states.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EntitySnapshot> {
        self.sender.subscribe()
    }
}

impl StatePublisher for InProcessStateBus {
    fn publish(&self, snapshot: EntitySnapshot) {
        if self.sender.send(snapshot).is_err() {
            tracing::trace!("state write not watched");
        }
    }
}
