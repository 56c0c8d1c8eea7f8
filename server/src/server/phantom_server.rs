use std::{
    collections::HashMap,
    error::Error,
    mem,
    panic::{self, AssertUnwindSafe},
};

use log::{debug, info, warn};

use holo_shared::{
    CarrierId, CheckedMap, EntityId, EntityIdAllocator, EntityIdSource, ItemAppearance,
    PacketBuilder, PacketFactory, PhantomKind, Position, Revision, RevisionError, Text, Tick,
};

use crate::{
    events::{Despawn, DespawnReason, Events, PickupAttempt},
    scope::{ObserverScopeMut, ObserverScopeRef, VisibilityDispatcher},
    task_queue::{Task, TaskQueue, TaskSender},
    transport::PacketSender,
    world::{
        entity_mut::PhantomEntityMut,
        entity_ref::PhantomEntityRef,
        line_key::LineKey,
        phantom_entity::{PhantomEntity, StateUpdate},
    },
    HoloServerError, Host, ObserverKey, ServerConfig,
};

pub type RefreshError = Box<dyn Error + Send + Sync>;
/// Produces the current text of a text holder; run every
/// `text_refresh_period` steps
pub type TextRefresher = Box<dyn FnMut() -> Result<Text, RefreshError>>;
/// Told about every pickup attempt on one item holder
pub type PickupHandler = Box<dyn FnMut(&PickupAttempt)>;

/// Version Dispatch Facade: the single entry point the host uses. Owns every
/// phantom entity, the packet factory bound at startup and the per-observer
/// visibility state. Must only be driven from the simulation thread.
pub struct PhantomServer {
    config: ServerConfig,
    factory: PacketFactory,
    sender: Box<dyn PacketSender>,
    allocator: EntityIdAllocator,
    entities: CheckedMap<EntityId, PhantomEntity>,
    dispatcher: VisibilityDispatcher,
    pickup_handlers: HashMap<EntityId, PickupHandler>,
    text_refreshers: HashMap<EntityId, TextRefresher>,
    task_queue: TaskQueue,
    incoming_events: Events,
    tick: Tick,
}

impl PhantomServer {
    /// Detects the host revision and binds the matching packet factory.
    /// Fails when the host runs a revision with no factory; the caller must
    /// then refuse to start.
    pub fn new(
        config: ServerConfig,
        host_revision: &str,
        sender: Box<dyn PacketSender>,
    ) -> Result<Self, HoloServerError> {
        let revision = Self::detect_supported_revision(host_revision)?;
        Ok(Self::with_revision(config, revision, sender))
    }

    pub fn with_revision(
        config: ServerConfig,
        revision: Revision,
        sender: Box<dyn PacketSender>,
    ) -> Self {
        info!(
            "Phantom entities bound to {} (protocol {})",
            revision,
            revision.protocol_version()
        );

        Self {
            config,
            factory: PacketFactory::new(revision),
            sender,
            allocator: EntityIdAllocator::new(),
            entities: CheckedMap::new(),
            dispatcher: VisibilityDispatcher::new(),
            pickup_handlers: HashMap::new(),
            text_refreshers: HashMap::new(),
            task_queue: TaskQueue::new(),
            incoming_events: Events::new(),
            tick: 0,
        }
    }

    pub fn detect_supported_revision(host_revision: &str) -> Result<Revision, RevisionError> {
        Revision::detect(host_revision)
    }

    pub fn revision(&self) -> Revision {
        self.factory.revision()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Simulation steps run so far
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // Entities

    /// Creates an invisible text holder at `position`. Nobody sees it until
    /// the next `tick` finds observers in range.
    ///
    /// # Panics
    /// Panics if the host counter returns an identity that is still live
    pub fn spawn_text_entity(
        &mut self,
        ids: &mut dyn EntityIdSource,
        position: Position,
    ) -> PhantomEntityMut<'_> {
        match self.try_spawn_text_entity(ids, position) {
            Ok(entity) => entity,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_spawn_text_entity(
        &mut self,
        ids: &mut dyn EntityIdSource,
        position: Position,
    ) -> Result<PhantomEntityMut<'_>, HoloServerError> {
        let id = self.allocator.try_allocate(ids)?;
        self.entities
            .insert(id, PhantomEntity::new_text(id, position));
        debug!("spawned text holder {}", id);

        Ok(PhantomEntityMut::new(self, &id))
    }

    /// Creates an item holder showing `appearance` at `position`. It
    /// destroys itself at the first anchor check unless a carrier is set.
    ///
    /// # Panics
    /// Panics if the host counter returns an identity that is still live
    pub fn spawn_item_entity(
        &mut self,
        ids: &mut dyn EntityIdSource,
        position: Position,
        appearance: ItemAppearance,
    ) -> PhantomEntityMut<'_> {
        match self.try_spawn_item_entity(ids, position, appearance) {
            Ok(entity) => entity,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_spawn_item_entity(
        &mut self,
        ids: &mut dyn EntityIdSource,
        position: Position,
        appearance: ItemAppearance,
    ) -> Result<PhantomEntityMut<'_>, HoloServerError> {
        let id = self.allocator.try_allocate(ids)?;
        self.entities
            .insert(id, PhantomEntity::new_item(id, position, appearance));
        debug!("spawned item holder {}", id);

        Ok(PhantomEntityMut::new(self, &id))
    }

    pub fn has_entity(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// # Panics
    /// Panics if the entity does not exist
    pub fn entity(&self, id: &EntityId) -> PhantomEntityRef<'_> {
        match self.try_entity(id) {
            Ok(entity) => entity,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_entity(&self, id: &EntityId) -> Result<PhantomEntityRef<'_>, HoloServerError> {
        match self.entities.get(id) {
            Some(entity) => Ok(PhantomEntityRef::new(self, entity)),
            None => Err(HoloServerError::EntityDoesNotExist { id: *id }),
        }
    }

    /// # Panics
    /// Panics if the entity does not exist
    pub fn entity_mut(&mut self, id: &EntityId) -> PhantomEntityMut<'_> {
        match self.try_entity_mut(id) {
            Ok(entity) => entity,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_entity_mut(
        &mut self,
        id: &EntityId,
    ) -> Result<PhantomEntityMut<'_>, HoloServerError> {
        if !self.entities.contains_key(id) {
            return Err(HoloServerError::EntityDoesNotExist { id: *id });
        }
        Ok(PhantomEntityMut::new(self, id))
    }

    pub fn entities(&self) -> Vec<EntityId> {
        let mut output: Vec<EntityId> = self.entities.keys().copied().collect();
        output.sort();
        output
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Destroys the entity for everyone who sees it and releases its
    /// identity. Destroying an entity that no longer exists does nothing.
    /// Returns whether the entity existed.
    pub fn destroy_entity(&mut self, id: &EntityId) -> bool {
        self.despawn(id, DespawnReason::Destroyed)
    }

    // Scopes

    pub fn observer_scope(&self, observer: &ObserverKey) -> ObserverScopeRef<'_> {
        ObserverScopeRef::new(self, observer)
    }

    pub fn observer_scope_mut(&mut self, observer: &ObserverKey) -> ObserverScopeMut<'_> {
        ObserverScopeMut::new(self, observer)
    }

    /// The observer's connection is gone. Its visibility state is dropped
    /// without sending anything.
    pub fn observer_disconnected(&mut self, observer: &ObserverKey) {
        self.dispatcher.remove_observer(observer);
        debug!("forgot {}", observer);
    }

    // Host interception

    /// Whether the host may write `id` to its world save. Never true for a
    /// phantom entity.
    pub fn should_persist(&self, id: &EntityId) -> bool {
        !self.entities.contains_key(id)
    }

    /// Whether the host must cancel damage dealt to `id`
    pub fn intercept_damage(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Whether the host must cancel `observer` picking up `id`. Attempts on
    /// an item holder are reported to its pickup handler and as a
    /// `PickupAttemptEvent`; no inventory ever changes.
    pub fn handle_pickup_attempt(&mut self, observer: &ObserverKey, id: &EntityId) -> bool {
        let Some(entity) = self.entities.get(id) else {
            return false;
        };
        if entity.kind() != PhantomKind::Item {
            return true;
        }

        let attempt = PickupAttempt {
            entity: *id,
            observer: *observer,
            owner: entity.owner(),
        };
        if let Some(handler) = self.pickup_handlers.get_mut(id) {
            if panic::catch_unwind(AssertUnwindSafe(|| handler(&attempt))).is_err() {
                warn!("pickup handler of phantom entity {} panicked", id);
            }
        }
        self.incoming_events.push_pickup(attempt);

        true
    }

    // Loop

    /// Advances one simulation step: applies queued tasks, runs text
    /// refreshers, checks anchors and recomputes who sees what
    pub fn tick(&mut self, host: &dyn Host) {
        self.tick = self.tick.wrapping_add(1);

        for task in self.task_queue.drain() {
            self.apply_task(task);
        }

        if self.tick % self.config.text_refresh_period.max(1) == 0 {
            self.run_text_refreshers();
        }

        self.check_anchors(host);
        self.update_entity_scopes(host);
    }

    /// Events collected since the last call
    pub fn receive(&mut self) -> Events {
        mem::take(&mut self.incoming_events)
    }

    /// Handle for producers on other threads. Their tasks are applied at the
    /// start of the next `tick`.
    pub fn task_queue_sender(&self) -> TaskSender {
        self.task_queue.sender()
    }

    /// Destroys every phantom entity and refuses further tasks
    pub fn shutdown(&mut self) {
        let ids = self.entities();
        for id in &ids {
            self.despawn(id, DespawnReason::Shutdown);
        }
        self.task_queue.close();
        info!("Phantom entity server shut down, {} entities destroyed", ids.len());
    }

    // Crate-public

    pub(crate) fn entity_record(&self, id: &EntityId) -> &PhantomEntity {
        match self.entities.get(id) {
            Some(entity) => entity,
            None => panic!("{}", HoloServerError::EntityDoesNotExist { id: *id }),
        }
    }

    pub(crate) fn entity_set_text(&mut self, id: &EntityId, text: Text) -> Result<(), HoloServerError> {
        let entity = self.entity_of_kind(id, PhantomKind::Text, "set_text")?;
        if entity.set_text(text) {
            self.broadcast_update(id, StateUpdate::Name);
        }
        Ok(())
    }

    pub(crate) fn entity_set_appearance(
        &mut self,
        id: &EntityId,
        appearance: ItemAppearance,
    ) -> Result<(), HoloServerError> {
        let entity = self.entity_of_kind(id, PhantomKind::Item, "set_appearance")?;
        if entity.set_appearance(appearance) {
            self.broadcast_update(id, StateUpdate::Appearance);
        }
        Ok(())
    }

    pub(crate) fn entity_move_to(
        &mut self,
        id: &EntityId,
        position: Position,
    ) -> Result<(), HoloServerError> {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or(HoloServerError::EntityDoesNotExist { id: *id })?;
        if entity.set_position(position) {
            self.broadcast_update(id, StateUpdate::Position);
        }
        Ok(())
    }

    pub(crate) fn entity_set_carrier(
        &mut self,
        id: &EntityId,
        carrier: Option<CarrierId>,
    ) -> Result<(), HoloServerError> {
        let entity = self.entity_of_kind(id, PhantomKind::Item, "set_carrier")?;
        if entity.set_carrier(carrier) {
            self.broadcast_update(id, StateUpdate::Mount);
        }
        Ok(())
    }

    pub(crate) fn entity_set_owner(&mut self, id: &EntityId, owner: Option<LineKey>) {
        if let Some(entity) = self.entities.get_mut(id) {
            entity.set_owner(owner);
        }
    }

    pub(crate) fn entity_set_tick_locked(&mut self, id: &EntityId, locked: bool) {
        let Some(entity) = self.entities.get_mut(id) else {
            return;
        };
        for update in entity.set_tick_locked(locked) {
            self.broadcast_update(id, update);
        }
        if locked {
            return;
        }
        if let Some(entity) = self.entities.get(id) {
            self.dispatcher
                .release(&*self.sender, &self.factory, entity);
        }
    }

    pub(crate) fn entity_set_pickup_handler(
        &mut self,
        id: &EntityId,
        handler: PickupHandler,
    ) -> Result<(), HoloServerError> {
        self.entity_of_kind(id, PhantomKind::Item, "on_pickup_attempt")?;
        if self.pickup_handlers.insert(*id, handler).is_some() {
            warn!("replaced the pickup handler of phantom entity {}", id);
        }
        Ok(())
    }

    pub(crate) fn entity_set_text_refresher(
        &mut self,
        id: &EntityId,
        refresher: TextRefresher,
    ) -> Result<(), HoloServerError> {
        self.entity_of_kind(id, PhantomKind::Text, "set_text_refresher")?;
        if self.text_refreshers.insert(*id, refresher).is_some() {
            warn!("replaced the text refresher of phantom entity {}", id);
        }
        Ok(())
    }

    /// Returns whether spawn packets were sent. For a tick-locked entity
    /// they are sent when the lock ends.
    pub(crate) fn entity_spawn_for(&mut self, id: &EntityId, observer: &ObserverKey) -> bool {
        let Some(entity) = self.entities.get(id) else {
            return false;
        };
        self.dispatcher
            .show(&*self.sender, &self.factory, entity, observer)
    }

    /// Returns whether a destroy packet was sent
    pub(crate) fn entity_despawn_for(&mut self, id: &EntityId, observer: &ObserverKey) -> bool {
        self.dispatcher
            .hide(&*self.sender, &self.factory, id, observer)
    }

    pub(crate) fn entity_observers(&self, id: &EntityId) -> Vec<ObserverKey> {
        let mut output = self.dispatcher.visible_observers(id);
        output.sort();
        output
    }

    pub(crate) fn observer_scope_has_entity(&self, observer: &ObserverKey, id: &EntityId) -> bool {
        self.dispatcher.is_visible(observer, id)
    }

    pub(crate) fn observer_scope_is_excluded(&self, observer: &ObserverKey, id: &EntityId) -> bool {
        self.dispatcher.is_excluded(observer, id)
    }

    pub(crate) fn observer_scope_set_entity(
        &mut self,
        observer: &ObserverKey,
        id: &EntityId,
        is_contained: bool,
    ) {
        if !self.entities.contains_key(id) {
            warn!("cannot change scope of {}, it does not exist", id);
            return;
        }
        if is_contained {
            self.dispatcher.include(observer, id);
        } else {
            self.dispatcher
                .exclude(&*self.sender, &self.factory, observer, id);
        }
    }

    // Private

    fn entity_of_kind(
        &mut self,
        id: &EntityId,
        kind: PhantomKind,
        operation: &'static str,
    ) -> Result<&mut PhantomEntity, HoloServerError> {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or(HoloServerError::EntityDoesNotExist { id: *id })?;
        if entity.kind() != kind {
            return Err(HoloServerError::wrong_kind(
                *id,
                operation,
                kind,
                entity.kind(),
            ));
        }
        Ok(entity)
    }

    fn broadcast_update(&self, id: &EntityId, update: StateUpdate) {
        let Some(entity) = self.entities.get(id) else {
            return;
        };
        if let Some(packet) = entity.update_packet(&self.factory, update) {
            self.dispatcher.broadcast(&*self.sender, id, &packet);
        }
    }

    fn despawn(&mut self, id: &EntityId, reason: DespawnReason) -> bool {
        let Some(entity) = self.entities.get_mut(id) else {
            debug!("phantom entity {} already destroyed", id);
            return false;
        };
        // nothing held back by a lock matters once the entity is gone
        entity.set_tick_locked(false);

        let observers = self
            .dispatcher
            .remove_entity(&*self.sender, &self.factory, id);
        let entity = self.entities.remove(id);
        self.allocator.release(id);
        self.pickup_handlers.remove(id);
        self.text_refreshers.remove(id);

        self.incoming_events.push_despawn(Despawn {
            entity: *id,
            owner: entity.owner(),
            reason,
        });
        debug!(
            "destroyed phantom entity {} ({:?}) for {} observers",
            id, reason, observers
        );
        true
    }

    fn apply_task(&mut self, task: Task) {
        let id = task.entity();
        if !self.entities.contains_key(&id) {
            debug!("dropping queued task for {}, it no longer exists", id);
            return;
        }
        let result = match task {
            Task::SetText { entity, text } => self.entity_set_text(&entity, text),
            Task::SetAppearance { entity, appearance } => {
                self.entity_set_appearance(&entity, appearance)
            }
            Task::MoveTo { entity, position } => self.entity_move_to(&entity, position),
            Task::Destroy { entity } => {
                self.despawn(&entity, DespawnReason::Destroyed);
                Ok(())
            }
        };
        if let Err(error) = result {
            warn!("rejected queued task: {}", error);
        }
    }

    fn run_text_refreshers(&mut self) {
        let mut ids: Vec<EntityId> = self.text_refreshers.keys().copied().collect();
        ids.sort();

        for id in ids {
            let Some(refresher) = self.text_refreshers.get_mut(&id) else {
                continue;
            };
            match panic::catch_unwind(AssertUnwindSafe(|| refresher())) {
                Ok(Ok(text)) => {
                    if let Err(error) = self.entity_set_text(&id, text) {
                        warn!("text refresher result rejected: {}", error);
                    }
                }
                Ok(Err(error)) => {
                    warn!("text refresher of phantom entity {} failed: {}", id, error);
                }
                Err(_) => {
                    warn!("text refresher of phantom entity {} panicked", id);
                }
            }
        }
    }

    fn check_anchors(&mut self, host: &dyn Host) {
        let period = self.config.anchor_check_period;
        let mut anchorless = Vec::new();
        for (id, entity) in self.entities.iter_mut() {
            if !entity.advance(period) {
                continue;
            }
            match entity.carrier() {
                Some(carrier) if host.carrier_exists(&carrier) => {}
                _ => anchorless.push(*id),
            }
        }

        for id in anchorless {
            debug!("phantom entity {} has no carrier, self-destructing", id);
            self.despawn(&id, DespawnReason::AnchorLost);
        }
    }

    fn update_entity_scopes(&mut self, host: &dyn Host) {
        let range = self.config.perception_range;
        for (_, entity) in self.entities.iter() {
            let in_range = host.observers_in_range(entity.position(), range);
            self.dispatcher
                .update(&*self.sender, &self.factory, entity, &in_range);
        }
    }
}
