//! Entity registry — the host side of the adapter lifecycle.
//!
//! Receives entities from platform setups, attaches them, re-reads their
//! state whenever they ask for a write, forwards service calls, and detaches
//! them on removal.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use aliste_domain::entity::EntitySnapshot;
use aliste_domain::error::{AlisteError, NotFoundError};
use aliste_domain::id::UniqueId;
use aliste_domain::service::ServiceCall;

use crate::ports::{Entity, StatePublisher, StateWriter};

/// Registry of attached entities, publishing their snapshots on every write.
pub struct EntityRegistry<E, P> {
    inner: Arc<Inner<E, P>>,
}

struct Inner<E, P> {
    entities: RwLock<BTreeMap<UniqueId, Arc<E>>>,
    states: RwLock<HashMap<UniqueId, EntitySnapshot>>,
    publisher: P,
}

/// Writer handed to entities. Holds the registry weakly so a forgotten
/// device callback cannot keep it alive.
struct RegistryWriter<E, P> {
    inner: Weak<Inner<E, P>>,
}

impl<E, P> EntityRegistry<E, P>
where
    E: Entity + 'static,
    P: StatePublisher + Send + Sync + 'static,
{
    /// Create an empty registry publishing through `publisher`.
    pub fn new(publisher: P) -> Self {
        Self {
            inner: Arc::new(Inner {
                entities: RwLock::new(BTreeMap::new()),
                states: RwLock::new(HashMap::new()),
                publisher,
            }),
        }
    }

    /// Attach each entity and write its initial state.
    ///
    /// An entity whose unique id is already registered is skipped.
    pub fn add_entities(&self, entities: Vec<E>) {
        let writer: Arc<dyn StateWriter> = Arc::new(RegistryWriter {
            inner: Arc::downgrade(&self.inner),
        });

        for entity in entities {
            let unique_id = entity.unique_id();
            let entity = Arc::new(entity);
            {
                let mut registered = self
                    .inner
                    .entities
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                if registered.contains_key(&unique_id) {
                    tracing::warn!(%unique_id, "entity already registered, skipping");
                    continue;
                }
                registered.insert(unique_id.clone(), Arc::clone(&entity));
            }

            entity.added_to_platform(Arc::clone(&writer));
            self.inner.write_state(&unique_id);
            tracing::debug!(%unique_id, "entity added");
        }
    }

    /// Look up an attached entity.
    #[must_use]
    pub fn get(&self, unique_id: &UniqueId) -> Option<Arc<E>> {
        self.inner.entity(unique_id)
    }

    /// The last snapshot written for an entity.
    #[must_use]
    pub fn state(&self, unique_id: &UniqueId) -> Option<EntitySnapshot> {
        self.inner
            .states
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(unique_id)
            .cloned()
    }

    /// Unique ids of all attached entities, sorted.
    #[must_use]
    pub fn unique_ids(&self) -> Vec<UniqueId> {
        self.inner
            .entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward a service call to the entity.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::NotFound`] for an unknown entity, otherwise
    /// whatever the entity returns.
    #[tracing::instrument(skip(self, call), fields(service = call.name()))]
    pub async fn call_service(
        &self,
        unique_id: &UniqueId,
        call: ServiceCall,
    ) -> Result<(), AlisteError> {
        let entity = self.get(unique_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: unique_id.to_string(),
        })?;
        entity.handle_service_call(call).await
    }

    /// Detach and forget an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::NotFound`] when the entity is not registered.
    pub fn remove(&self, unique_id: &UniqueId) -> Result<(), AlisteError> {
        let entity = self
            .inner
            .entities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(unique_id)
            .ok_or_else(|| NotFoundError {
                entity: "Entity",
                id: unique_id.to_string(),
            })?;

        entity.will_remove_from_platform();
        self.inner
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(unique_id);
        tracing::debug!(%unique_id, "entity removed");
        Ok(())
    }

    /// Detach every entity.
    pub fn shutdown(&self) {
        let entities = std::mem::take(
            &mut *self
                .inner
                .entities
                .write()
                .unwrap_or_else(PoisonError::into_inner),
        );
        let count = entities.len();
        for entity in entities.into_values() {
            entity.will_remove_from_platform();
        }
        self.inner
            .states
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        tracing::info!(count, "entities detached");
    }
}

impl<E: Entity, P: StatePublisher> Inner<E, P> {
    fn entity(&self, unique_id: &UniqueId) -> Option<Arc<E>> {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(unique_id)
            .cloned()
    }

    fn write_state(&self, unique_id: &UniqueId) {
        let Some(entity) = self.entity(unique_id) else {
            tracing::debug!(%unique_id, "state write for unregistered entity ignored");
            return;
        };

        let snapshot = match entity.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(%unique_id, error = %err, "failed to read entity state");
                return;
            }
        };

        {
            // The entity may have been removed while its snapshot was built.
            let mut states = self.states.write().unwrap_or_else(PoisonError::into_inner);
            let still_registered = self
                .entity(unique_id)
                .is_some_and(|current| Arc::ptr_eq(&current, &entity));
            if !still_registered {
                tracing::debug!(%unique_id, "entity removed during state write, dropped");
                return;
            }
            states.insert(unique_id.clone(), snapshot.clone());
        }
        tracing::trace!(%unique_id, state = %snapshot.state, "state written");
        self.publisher.publish(snapshot);
    }
}

impl<E, P> StateWriter for RegistryWriter<E, P>
where
    E: Entity,
    P: StatePublisher + Send + Sync,
{
    fn write_state(&self, unique_id: &UniqueId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.write_state(unique_id);
        }
    }
}
