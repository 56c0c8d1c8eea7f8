use holo_shared::EntityId;

use crate::{ObserverKey, PhantomServer};

pub struct ObserverScopeRef<'s> {
    server: &'s PhantomServer,
    key: ObserverKey,
}

impl<'s> ObserverScopeRef<'s> {
    pub(crate) fn new(server: &'s PhantomServer, key: &ObserverKey) -> Self {
        Self { server, key: *key }
    }

    /// Returns true if the Observer currently sees the phantom entity
    pub fn has(&self, entity: &EntityId) -> bool {
        self.server.observer_scope_has_entity(&self.key, entity)
    }

    /// Returns true if the phantom entity is hidden from the Observer
    pub fn is_excluded(&self, entity: &EntityId) -> bool {
        self.server.observer_scope_is_excluded(&self.key, entity)
    }
}

pub struct ObserverScopeMut<'s> {
    server: &'s mut PhantomServer,
    key: ObserverKey,
}

impl<'s> ObserverScopeMut<'s> {
    pub(crate) fn new(server: &'s mut PhantomServer, key: &ObserverKey) -> Self {
        Self { server, key: *key }
    }

    /// Returns true if the Observer currently sees the phantom entity
    pub fn has(&self, entity: &EntityId) -> bool {
        self.server.observer_scope_has_entity(&self.key, entity)
    }

    pub fn is_excluded(&self, entity: &EntityId) -> bool {
        self.server.observer_scope_is_excluded(&self.key, entity)
    }

    /// Lifts an exclusion. The entity reappears on the next tick if the
    /// Observer is in range of it.
    pub fn include(&mut self, entity: &EntityId) -> &mut Self {
        self.server.observer_scope_set_entity(&self.key, entity, true);

        self
    }

    /// Hides the phantom entity from the Observer, even while in range
    pub fn exclude(&mut self, entity: &EntityId) -> &mut Self {
        self.server.observer_scope_set_entity(&self.key, entity, false);

        self
    }
}
