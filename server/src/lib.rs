//! # Holo Server
//! Spawns client-only phantom entities (floating text holders and item
//! holders) for the observers of a game server that are in range of them, and
//! keeps them in sync using the packet layout of the host's protocol revision.
//! Phantom entities never exist in the host's simulation.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use holo_shared::{
        CarrierId, EntityId, EntityIdSource, ItemAppearance, NamedColor, PhantomKind, Position,
        Revision, RevisionError, Text, TextColor, TextSpan, TextStyle, Tick,
    };
}

mod error;
mod events;
mod host;
mod observer;
mod scope;
mod server;
mod task_queue;
mod world;

pub use error::HoloServerError;
pub use events::{
    Despawn, DespawnEntityEvent, DespawnReason, Event, Events, PickupAttempt, PickupAttemptEvent,
};
pub use host::Host;
pub use observer::ObserverKey;
pub use scope::{ObserverScopeMut, ObserverScopeRef};
pub use server::{PhantomServer, PickupHandler, RefreshError, ServerConfig, TextRefresher};
pub use task_queue::{Task, TaskQueueClosed, TaskSender};
pub use world::{
    entity_mut::PhantomEntityMut, entity_ref::PhantomEntityRef, line_key::LineKey,
    phantom_entity::PhantomEntity, suppression::SuppressionFlags,
};
