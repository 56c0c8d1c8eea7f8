//! # Holo Shared
//! Common functionality shared by the phantom entity server and its test
//! harness: the entity data model, rich text, host revision detection, entity
//! identity allocation and one packet factory per supported revision.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use holo_serde::{
    ser_str, with_pooled_writer, ByteCounter, ByteReader, ByteWrite, ByteWriter, Serde, SerdeErr,
    VarInt,
};

mod protocol;
mod text;
mod types;
mod world;

pub use protocol::{
    error::RevisionError,
    packet_factory::{PacketBuilder, PacketFactory},
    revision::Revision,
    v1_12_r1::V1_12R1Factory,
    v1_16_r3::V1_16R3Factory,
    v1_8_r3::V1_8R3Factory,
};
pub use text::{
    color::{NamedColor, TextColor},
    Text, TextSpan, TextStyle,
};
pub use types::Tick;
pub use world::{
    checked_map::{CheckedMap, CheckedSet},
    entity_id::{CarrierId, EntityId},
    entity_id_allocator::{EntityIdAllocator, EntityIdSource},
    error::AllocatorError,
    item_appearance::ItemAppearance,
    phantom_kind::PhantomKind,
    position::Position,
};
