use std::vec::IntoIter;

use holo_shared::EntityId;

use crate::{world::line_key::LineKey, ObserverKey};

/// An observer walked into an item holder and would have picked it up. The
/// pickup itself was cancelled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PickupAttempt {
    pub entity: EntityId,
    pub observer: ObserverKey,
    pub owner: Option<LineKey>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DespawnReason {
    /// `destroy` was called
    Destroyed,
    /// The carrier of an item holder no longer exists
    AnchorLost,
    /// The server was shut down
    Shutdown,
}

/// A phantom entity is gone for good; its identity has been released
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Despawn {
    pub entity: EntityId,
    pub owner: Option<LineKey>,
    pub reason: DespawnReason,
}

pub struct Events {
    pickups: Vec<PickupAttempt>,
    despawns: Vec<Despawn>,
    empty: bool,
}

impl Events {
    pub(crate) fn new() -> Self {
        Self {
            pickups: Vec::new(),
            despawns: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: Event>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: Event>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_pickup(&mut self, pickup: PickupAttempt) {
        self.pickups.push(pickup);
        self.empty = false;
    }

    pub(crate) fn push_despawn(&mut self, despawn: Despawn) {
        self.despawns.push(despawn);
        self.empty = false;
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

// Event Trait
pub trait Event {
    type Iter;

    fn iter(events: &mut Events) -> Self::Iter;

    fn has(events: &Events) -> bool;
}

// Pickup Attempt Event
pub struct PickupAttemptEvent;
impl Event for PickupAttemptEvent {
    type Iter = IntoIter<PickupAttempt>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = std::mem::take(&mut events.pickups);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.pickups.is_empty()
    }
}

// Despawn Entity Event
pub struct DespawnEntityEvent;
impl Event for DespawnEntityEvent {
    type Iter = IntoIter<Despawn>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = std::mem::take(&mut events.despawns);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.despawns.is_empty()
    }
}
