//! Host platform callbacks handed to adapters.

use aliste_domain::id::UniqueId;

/// Asks the host to re-read an entity and store its state.
///
/// Adapters register this with their device handle so out-of-band changes
/// reach the host.
pub trait StateWriter: Send + Sync {
    fn write_state(&self, unique_id: &UniqueId);
}

/// Registration callback receiving the entities built by a platform setup.
pub trait AddEntities<E> {
    fn add_entities(&self, entities: Vec<E>);
}

impl<E, F> AddEntities<E> for F
where
    F: Fn(Vec<E>),
{
    fn add_entities(&self, entities: Vec<E>) {
        self(entities);
    }
}
