mod entity_scope_map;
mod observer_scope;
mod visibility_dispatcher;

pub(crate) use entity_scope_map::EntityScopeMap;
pub use observer_scope::{ObserverScopeMut, ObserverScopeRef};
pub(crate) use visibility_dispatcher::VisibilityDispatcher;
