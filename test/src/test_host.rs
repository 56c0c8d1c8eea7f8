use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicI32, Ordering},
};

use holo_server::{Host, ObserverKey};
use holo_shared::{CarrierId, EntityIdSource, Position};

/// A stand-in game world: observers at fixed positions, a set of live
/// carrier entities and the entity counter
pub struct TestHost {
    observers: HashMap<ObserverKey, Position>,
    carriers: HashSet<CarrierId>,
    counter: AtomicI32,
}

impl TestHost {
    pub fn new() -> Self {
        Self::with_counter(1000)
    }

    pub fn with_counter(first_id: i32) -> Self {
        Self {
            observers: HashMap::new(),
            carriers: HashSet::new(),
            counter: AtomicI32::new(first_id),
        }
    }

    pub fn place_observer(&mut self, key: u64, x: f64, y: f64, z: f64) -> ObserverKey {
        let key = ObserverKey::new(key);
        self.observers.insert(key, Position::new(x, y, z));
        key
    }

    pub fn remove_observer(&mut self, key: &ObserverKey) {
        self.observers.remove(key);
    }

    /// Spawns a real entity that item holders can ride on
    pub fn spawn_carrier(&mut self) -> CarrierId {
        let carrier = CarrierId::new(self.counter.fetch_add(1, Ordering::SeqCst));
        self.carriers.insert(carrier);
        carrier
    }

    pub fn remove_carrier(&mut self, carrier: &CarrierId) {
        self.carriers.remove(carrier);
    }

    /// Next value the entity counter will hand out
    pub fn peek_counter(&self) -> i32 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestHost {
    fn observers_in_range(&self, position: &Position, range: f64) -> Vec<ObserverKey> {
        let mut output: Vec<ObserverKey> = self
            .observers
            .iter()
            .filter(|(_, location)| location.distance_squared(position) <= range * range)
            .map(|(key, _)| *key)
            .collect();
        output.sort();
        output
    }

    fn carrier_exists(&self, carrier: &CarrierId) -> bool {
        self.carriers.contains(carrier)
    }
}

impl EntityIdSource for TestHost {
    fn next_entity_id(&mut self) -> i32 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}
