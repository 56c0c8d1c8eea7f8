use std::sync::atomic::{AtomicI32, Ordering};

use log::debug;

use crate::{AllocatorError, CheckedSet, EntityId};

/// The host's own entity counter. Phantom identities are drawn from it so they
/// can never collide with an identity the host gives to a real entity.
pub trait EntityIdSource {
    fn next_entity_id(&mut self) -> i32;
}

impl EntityIdSource for AtomicI32 {
    fn next_entity_id(&mut self) -> i32 {
        self.fetch_add(1, Ordering::SeqCst)
    }
}

impl<S: EntityIdSource + ?Sized> EntityIdSource for &mut S {
    fn next_entity_id(&mut self) -> i32 {
        (**self).next_entity_id()
    }
}

/// Hands out entity identities for phantom entities and tracks which of them
/// are live. Must only be used from the simulation thread.
pub struct EntityIdAllocator {
    live: CheckedSet<EntityId>,
}

impl EntityIdAllocator {
    pub fn new() -> Self {
        Self {
            live: CheckedSet::new(),
        }
    }

    /// Draw a new identity from the host counter
    pub fn try_allocate(
        &mut self,
        source: &mut dyn EntityIdSource,
    ) -> Result<EntityId, AllocatorError> {
        let id = EntityId::new(source.next_entity_id());
        if self.live.contains(&id) {
            return Err(AllocatorError::Collision { id });
        }
        self.live.insert(id);
        debug!("allocated phantom entity identity {}", id);
        Ok(id)
    }

    /// Draw a new identity from the host counter
    ///
    /// # Panics
    /// Panics if the host counter returns an identity that is still live
    pub fn allocate(&mut self, source: &mut dyn EntityIdSource) -> EntityId {
        match self.try_allocate(source) {
            Ok(id) => id,
            Err(error) => panic!("{}", error),
        }
    }

    /// Give an identity back. The host counter never reissues it on its own;
    /// this only ends this layer's bookkeeping.
    pub fn try_release(&mut self, id: &EntityId) -> Result<(), AllocatorError> {
        if !self.live.contains(id) {
            return Err(AllocatorError::DoubleRelease { id: *id });
        }
        self.live.remove(id);
        debug!("released phantom entity identity {}", id);
        Ok(())
    }

    /// # Panics
    /// Panics if `id` is not live
    pub fn release(&mut self, id: &EntityId) {
        if let Err(error) = self.try_release(id) {
            panic!("{}", error);
        }
    }

    pub fn is_live(&self, id: &EntityId) -> bool {
        self.live.contains(id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Default for EntityIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
