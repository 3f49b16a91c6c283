//! State bus port — fan-out of entity snapshots.

use aliste_domain::entity::EntitySnapshot;

/// Publishes freshly written entity snapshots to interested subscribers.
pub trait StatePublisher {
    /// Publish a snapshot to all current subscribers.
    fn publish(&self, snapshot: EntitySnapshot);
}

impl<T: StatePublisher + Send + Sync> StatePublisher for std::sync::Arc<T> {
    fn publish(&self, snapshot: EntitySnapshot) {
        (**self).publish(snapshot);
    }
}
