use holo_shared::{CarrierId, EntityId, ItemAppearance, PhantomKind, Position, Text};
use uuid::Uuid;

use crate::{
    world::{line_key::LineKey, phantom_entity::PhantomEntity, suppression::SuppressionFlags},
    ObserverKey, PhantomServer,
};

// PhantomEntityRef
pub struct PhantomEntityRef<'s> {
    server: &'s PhantomServer,
    entity: &'s PhantomEntity,
}

impl<'s> PhantomEntityRef<'s> {
    pub(crate) fn new(server: &'s PhantomServer, entity: &'s PhantomEntity) -> Self {
        Self { server, entity }
    }

    pub fn id(&self) -> EntityId {
        self.entity.id()
    }

    pub fn uuid(&self) -> &Uuid {
        self.entity.uuid()
    }

    pub fn kind(&self) -> PhantomKind {
        self.entity.kind()
    }

    pub fn position(&self) -> &Position {
        self.entity.position()
    }

    pub fn text(&self) -> &Text {
        self.entity.text()
    }

    pub fn appearance(&self) -> Option<&ItemAppearance> {
        self.entity.appearance()
    }

    pub fn carrier(&self) -> Option<CarrierId> {
        self.entity.carrier()
    }

    pub fn owner(&self) -> Option<LineKey> {
        self.entity.owner()
    }

    pub fn flags(&self) -> SuppressionFlags {
        self.entity.flags()
    }

    pub fn is_tick_locked(&self) -> bool {
        self.entity.is_tick_locked()
    }

    /// Observers that currently see the entity
    pub fn observers(&self) -> Vec<ObserverKey> {
        self.server.entity_observers(&self.entity.id())
    }

    pub fn is_visible_to(&self, observer: &ObserverKey) -> bool {
        self.server
            .observer_scope_has_entity(observer, &self.entity.id())
    }
}
