use holo_shared::{CarrierId, Position};

use crate::ObserverKey;

/// What the phantom entity server needs to know about the live game world.
/// Queried once per simulation step, always from the simulation thread.
pub trait Host {
    /// Every connected observer whose location lies within `range` of
    /// `position`. Observers in another world must not be returned.
    fn observers_in_range(&self, position: &Position, range: f64) -> Vec<ObserverKey>;

    /// Whether the real entity an item holder rides on is still alive
    fn carrier_exists(&self, carrier: &CarrierId) -> bool;
}
