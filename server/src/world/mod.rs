pub mod entity_mut;
pub mod entity_ref;
pub mod line_key;
pub mod phantom_entity;
pub mod suppression;
