use uuid::Uuid;

use holo_serde::{ser_str, with_pooled_writer, ByteWrite, Serde, VarInt};

use crate::{
    protocol::metadata::{modern, ARMOR_STAND_MARKER, FLAG_INVISIBLE},
    EntityId, ItemAppearance, PacketBuilder, PhantomKind, Position, Revision, Text,
};

const SPAWN_ENTITY: i32 = 0x00;
const DESTROY_ENTITIES: i32 = 0x36;
const ENTITY_METADATA: i32 = 0x44;
const SET_PASSENGERS: i32 = 0x4B;
const ENTITY_TELEPORT: i32 = 0x56;

const ENTITY_TYPE_ARMOR_STAND: i32 = 1;
const ENTITY_TYPE_ITEM: i32 = 37;

const SERIALIZER_BYTE: i32 = 0;
const SERIALIZER_OPT_CHAT: i32 = 5;
const SERIALIZER_SLOT: i32 = 6;
const SERIALIZER_BOOLEAN: i32 = 7;

const INDEX_FLAGS: u8 = 0;
const INDEX_CUSTOM_NAME: u8 = 2;
const INDEX_CUSTOM_NAME_VISIBLE: u8 = 3;
const INDEX_NO_GRAVITY: u8 = 5;
const INDEX_ITEM: u8 = 7;
const INDEX_ARMOR_STAND_FLAGS: u8 = 14;

/// Protocol 754 (1.16.4 - 1.16.5). Positions are doubles and names are
/// optional JSON chat components, so RGB colors survive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct V1_16R3Factory;

impl V1_16R3Factory {
    fn write_position(writer: &mut dyn ByteWrite, position: &Position) {
        position.x().ser(writer);
        position.render_y().ser(writer);
        position.z().ser(writer);
    }

    fn write_no_gravity(writer: &mut dyn ByteWrite) {
        modern::header(writer, INDEX_NO_GRAVITY, SERIALIZER_BOOLEAN);
        true.ser(writer);
    }
}

impl PacketBuilder for V1_16R3Factory {
    fn revision(&self) -> Revision {
        Revision::V1_16_R3
    }

    fn build_spawn(
        &self,
        id: EntityId,
        uuid: &Uuid,
        kind: PhantomKind,
        position: &Position,
    ) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(SPAWN_ENTITY).ser(writer);
            VarInt(id.value()).ser(writer);
            uuid.ser(writer);
            match kind {
                PhantomKind::Text => VarInt(ENTITY_TYPE_ARMOR_STAND).ser(writer),
                PhantomKind::Item => VarInt(ENTITY_TYPE_ITEM).ser(writer),
            }
            Self::write_position(writer, position);

            // pitch, yaw
            0i8.ser(writer);
            0i8.ser(writer);

            // object data, 1 marks an item's velocity as explicitly zero
            match kind {
                PhantomKind::Item => 1i32.ser(writer),
                PhantomKind::Text => 0i32.ser(writer),
            }

            // velocity
            0i16.ser(writer);
            0i16.ser(writer);
            0i16.ser(writer);

            writer.to_vec()
        })
    }

    fn build_destroy(&self, id: EntityId) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(DESTROY_ENTITIES).ser(writer);
            VarInt(1).ser(writer);
            VarInt(id.value()).ser(writer);
            writer.to_vec()
        })
    }

    fn build_teleport(&self, id: EntityId, position: &Position) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(ENTITY_TELEPORT).ser(writer);
            VarInt(id.value()).ser(writer);
            Self::write_position(writer, position);
            0i8.ser(writer);
            0i8.ser(writer);
            false.ser(writer);
            writer.to_vec()
        })
    }

    fn build_name_update(&self, id: EntityId, text: &Text) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(ENTITY_METADATA).ser(writer);
            VarInt(id.value()).ser(writer);

            modern::header(writer, INDEX_FLAGS, SERIALIZER_BYTE);
            FLAG_INVISIBLE.ser(writer);

            let visible = !text.is_empty();
            modern::header(writer, INDEX_CUSTOM_NAME, SERIALIZER_OPT_CHAT);
            visible.ser(writer);
            if visible {
                ser_str(&text.to_json(), writer);
            }
            modern::header(writer, INDEX_CUSTOM_NAME_VISIBLE, SERIALIZER_BOOLEAN);
            visible.ser(writer);

            Self::write_no_gravity(writer);

            modern::header(writer, INDEX_ARMOR_STAND_FLAGS, SERIALIZER_BYTE);
            ARMOR_STAND_MARKER.ser(writer);

            writer.write_byte(modern::END);
            writer.to_vec()
        })
    }

    fn build_item_update(&self, id: EntityId, appearance: &ItemAppearance) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(ENTITY_METADATA).ser(writer);
            VarInt(id.value()).ser(writer);

            Self::write_no_gravity(writer);

            modern::header(writer, INDEX_ITEM, SERIALIZER_SLOT);
            // present, item id, count, no NBT
            true.ser(writer);
            VarInt(appearance.item_id()).ser(writer);
            1i8.ser(writer);
            writer.write_byte(0x00);

            writer.write_byte(modern::END);
            writer.to_vec()
        })
    }

    fn build_mount(&self, passenger: EntityId, vehicle: EntityId) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(SET_PASSENGERS).ser(writer);
            VarInt(vehicle.value()).ser(writer);
            VarInt(1).ser(writer);
            VarInt(passenger.value()).ser(writer);
            writer.to_vec()
        })
    }
}
