pub mod checked_map;
pub mod entity_id;
pub mod entity_id_allocator;
pub mod error;
pub mod item_appearance;
pub mod phantom_kind;
pub mod position;
