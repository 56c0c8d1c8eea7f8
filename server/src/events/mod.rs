pub(crate) mod world_events;

pub use world_events::*;
