use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use holo_shared::{CheckedSet, EntityId, PacketBuilder};

use crate::{transport::PacketSender, world::phantom_entity::PhantomEntity, ObserverKey};

use super::EntityScopeMap;

/// Tracks which observers currently see which phantom entity, and turns
/// changes of that relation into spawn and destroy packets.
///
/// For every (observer, entity) pair the packets sent alternate strictly:
/// spawn, destroy, spawn, ... No update is ever sent to an observer outside
/// the entity's visible set.
///
/// Observers that come into range of a tick-locked entity are held back and
/// spawned by `release` once the lock ends, so they never see half a batch.
pub struct VisibilityDispatcher {
    visible: HashMap<EntityId, CheckedSet<ObserverKey>>,
    held: HashMap<EntityId, HashSet<ObserverKey>>,
    exclusions: EntityScopeMap,
}

impl VisibilityDispatcher {
    pub fn new() -> Self {
        Self {
            visible: HashMap::new(),
            held: HashMap::new(),
            exclusions: EntityScopeMap::new(),
        }
    }

    pub fn is_visible(&self, observer: &ObserverKey, entity: &EntityId) -> bool {
        self.visible
            .get(entity)
            .is_some_and(|observers| observers.contains(observer))
    }

    pub fn visible_observers(&self, entity: &EntityId) -> Vec<ObserverKey> {
        self.visible
            .get(entity)
            .map(|observers| observers.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_excluded(&self, observer: &ObserverKey, entity: &EntityId) -> bool {
        self.exclusions.is_excluded(observer, entity)
    }

    /// Spawn `entity` for `observer` unless it is already visible to them.
    /// A tick-locked entity is only spawned when `release` is called.
    /// Returns whether packets were sent.
    pub fn show(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        entity: &PhantomEntity,
        observer: &ObserverKey,
    ) -> bool {
        let observers = self.visible.entry(entity.id()).or_default();
        if observers.contains(observer) {
            return false;
        }
        if entity.is_tick_locked() {
            if self.held.entry(entity.id()).or_default().insert(*observer) {
                debug!("holding back phantom entity {} from {}", entity.id(), observer);
            }
            return false;
        }
        observers.insert(*observer);
        for packet in entity.spawn_packets(factory) {
            send(sender, observer, &packet);
        }
        debug!("spawned phantom entity {} for {}", entity.id(), observer);
        true
    }

    /// Destroy `entity` for `observer` if it is visible to them.
    /// Returns whether a packet was sent.
    pub fn hide(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        entity: &EntityId,
        observer: &ObserverKey,
    ) -> bool {
        if let Some(held) = self.held.get_mut(entity) {
            held.remove(observer);
        }
        let Some(observers) = self.visible.get_mut(entity) else {
            return false;
        };
        if !observers.contains(observer) {
            return false;
        }
        observers.remove(observer);
        send(sender, observer, &factory.build_destroy(*entity));
        debug!("destroyed phantom entity {} for {}", entity, observer);
        true
    }

    /// Send `packet` to every observer that currently sees `entity`
    pub fn broadcast(&self, sender: &dyn PacketSender, entity: &EntityId, packet: &[u8]) {
        let Some(observers) = self.visible.get(entity) else {
            return;
        };
        for observer in observers.iter() {
            send(sender, observer, packet);
        }
    }

    /// Bring the visible set of `entity` in line with the observers that are
    /// in range of it and have not excluded it
    pub fn update(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        entity: &PhantomEntity,
        in_range: &[ObserverKey],
    ) {
        let id = entity.id();
        let should_see: HashSet<ObserverKey> = in_range
            .iter()
            .filter(|observer| !self.exclusions.is_excluded(observer, &id))
            .copied()
            .collect();

        for observer in self.visible_observers(&id) {
            if !should_see.contains(&observer) {
                self.hide(sender, factory, &id, &observer);
            }
        }
        if let Some(held) = self.held.get_mut(&id) {
            held.retain(|observer| should_see.contains(observer));
        }
        for observer in &should_see {
            self.show(sender, factory, entity, observer);
        }
    }

    /// Spawn `entity` for every observer held back while it was tick-locked.
    /// Returns how many observers were spawned.
    pub fn release(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        entity: &PhantomEntity,
    ) -> usize {
        let Some(held) = self.held.remove(&entity.id()) else {
            return 0;
        };
        let mut shown = 0;
        for observer in &held {
            if self.show(sender, factory, entity, observer) {
                shown += 1;
            }
        }
        shown
    }

    /// Destroy `entity` for everyone who sees it and forget it.
    /// Returns how many observers were told.
    pub fn remove_entity(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        entity: &EntityId,
    ) -> usize {
        self.exclusions.remove_entity(entity);
        self.held.remove(entity);
        let Some(observers) = self.visible.remove(entity) else {
            return 0;
        };
        if !observers.is_empty() {
            let packet = factory.build_destroy(*entity);
            for observer in observers.iter() {
                send(sender, observer, &packet);
            }
        }
        observers.len()
    }

    /// Hide `entity` from `observer` until `include` is called
    pub fn exclude(
        &mut self,
        sender: &dyn PacketSender,
        factory: &dyn PacketBuilder,
        observer: &ObserverKey,
        entity: &EntityId,
    ) {
        self.exclusions.exclude(*observer, *entity);
        self.hide(sender, factory, entity, observer);
    }

    pub fn include(&mut self, observer: &ObserverKey, entity: &EntityId) {
        self.exclusions.include(observer, entity);
    }

    /// The observer's connection is gone; nothing can be sent to it
    pub fn remove_observer(&mut self, observer: &ObserverKey) {
        for observers in self.visible.values_mut() {
            if observers.contains(observer) {
                observers.remove(observer);
            }
        }
        for observers in self.held.values_mut() {
            observers.remove(observer);
        }
        self.exclusions.remove_observer(observer);
    }
}

impl Default for VisibilityDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn send(sender: &dyn PacketSender, observer: &ObserverKey, packet: &[u8]) {
    if let Err(error) = sender.send(observer, packet) {
        warn!("{}", error);
    }
}
