use std::collections::{HashMap, HashSet};

use holo_shared::EntityId;

use crate::ObserverKey;

/// Explicit per-observer exclusions. An excluded entity stays hidden from
/// that observer even while in range.
pub struct EntityScopeMap {
    entities_of_observer: HashMap<ObserverKey, HashSet<EntityId>>,
    observers_of_entity: HashMap<EntityId, HashSet<ObserverKey>>,
}

impl EntityScopeMap {
    pub fn new() -> Self {
        Self {
            entities_of_observer: HashMap::new(),
            observers_of_entity: HashMap::new(),
        }
    }

    pub fn is_excluded(&self, observer: &ObserverKey, entity: &EntityId) -> bool {
        self.entities_of_observer
            .get(observer)
            .is_some_and(|entities| entities.contains(entity))
    }

    pub fn exclude(&mut self, observer: ObserverKey, entity: EntityId) {
        self.entities_of_observer
            .entry(observer)
            .or_default()
            .insert(entity);
        self.observers_of_entity
            .entry(entity)
            .or_default()
            .insert(observer);
    }

    pub fn include(&mut self, observer: &ObserverKey, entity: &EntityId) {
        if let Some(entities) = self.entities_of_observer.get_mut(observer) {
            entities.remove(entity);
            if entities.is_empty() {
                self.entities_of_observer.remove(observer);
            }
        }
        if let Some(observers) = self.observers_of_entity.get_mut(entity) {
            observers.remove(observer);
            if observers.is_empty() {
                self.observers_of_entity.remove(entity);
            }
        }
    }

    pub fn remove_observer(&mut self, observer: &ObserverKey) {
        if let Some(entities) = self.entities_of_observer.remove(observer) {
            for entity in entities {
                if let Some(observers) = self.observers_of_entity.get_mut(&entity) {
                    observers.remove(observer);
                    if observers.is_empty() {
                        self.observers_of_entity.remove(&entity);
                    }
                }
            }
        }
    }

    pub fn remove_entity(&mut self, entity: &EntityId) {
        if let Some(observers) = self.observers_of_entity.remove(entity) {
            for observer in observers {
                if let Some(entities) = self.entities_of_observer.get_mut(&observer) {
                    entities.remove(entity);
                    if entities.is_empty() {
                        self.entities_of_observer.remove(&observer);
                    }
                }
            }
        }
    }
}

impl Default for EntityScopeMap {
    fn default() -> Self {
        Self::new()
    }
}
