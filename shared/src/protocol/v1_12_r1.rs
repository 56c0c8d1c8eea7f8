use uuid::Uuid;

use holo_serde::{ser_str, with_pooled_writer, ByteWrite, Serde, VarInt};

use crate::{
    protocol::metadata::{modern, ARMOR_STAND_MARKER, FLAG_INVISIBLE},
    EntityId, ItemAppearance, PacketBuilder, PhantomKind, Position, Revision, Text,
};

const SPAWN_OBJECT: i32 = 0x00;
const DESTROY_ENTITIES: i32 = 0x32;
const ENTITY_METADATA: i32 = 0x3C;
const SET_PASSENGERS: i32 = 0x43;
const ENTITY_TELEPORT: i32 = 0x4C;

const OBJECT_ITEM: i8 = 2;
const OBJECT_ARMOR_STAND: i8 = 78;

const SERIALIZER_BYTE: i32 = 0;
const SERIALIZER_STRING: i32 = 3;
const SERIALIZER_SLOT: i32 = 5;
const SERIALIZER_BOOLEAN: i32 = 6;

const INDEX_FLAGS: u8 = 0;
const INDEX_CUSTOM_NAME: u8 = 2;
const INDEX_CUSTOM_NAME_VISIBLE: u8 = 3;
const INDEX_NO_GRAVITY: u8 = 5;
const INDEX_ITEM: u8 = 6;
const INDEX_ARMOR_STAND_FLAGS: u8 = 11;

/// Protocol 340 (1.12 - 1.12.2). Positions are doubles and names are plain
/// strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct V1_12R1Factory;

impl V1_12R1Factory {
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

impl PacketBuilder for V1_12R1Factory {
    fn revision(&self) -> Revision {
        Revision::V1_12_R1
    }

    fn build_spawn(
        &self,
        id: EntityId,
        uuid: &Uuid,
        kind: PhantomKind,
        position: &Position,
    ) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(SPAWN_OBJECT).ser(writer);
            VarInt(id.value()).ser(writer);
            uuid.ser(writer);
            match kind {
                PhantomKind::Text => OBJECT_ARMOR_STAND.ser(writer),
                PhantomKind::Item => OBJECT_ITEM.ser(writer),
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
            if visible {
                modern::header(writer, INDEX_CUSTOM_NAME, SERIALIZER_STRING);
                ser_str(&text.to_legacy_string(), writer);
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
            (appearance.item_id() as i16).ser(writer);
            1i8.ser(writer);
            appearance.damage().ser(writer);
            // no NBT
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
