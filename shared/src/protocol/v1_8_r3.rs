use uuid::Uuid;

use holo_serde::{ser_str, with_pooled_writer, ByteWrite, Serde, VarInt};

use crate::{
    protocol::metadata::{legacy, ARMOR_STAND_MARKER, FLAG_INVISIBLE},
    world::position::to_fixed_point,
    EntityId, ItemAppearance, PacketBuilder, PhantomKind, Position, Revision, Text,
};

const SPAWN_OBJECT: i32 = 0x0E;
const DESTROY_ENTITIES: i32 = 0x13;
const ENTITY_TELEPORT: i32 = 0x18;
const ATTACH_ENTITY: i32 = 0x1B;
const ENTITY_METADATA: i32 = 0x1C;

const OBJECT_ITEM: i8 = 2;
const OBJECT_ARMOR_STAND: i8 = 78;

const INDEX_FLAGS: u8 = 0;
const INDEX_CUSTOM_NAME: u8 = 2;
const INDEX_CUSTOM_NAME_VISIBLE: u8 = 3;
const INDEX_ITEM: u8 = 10;
const INDEX_ARMOR_STAND_FLAGS: u8 = 10;

/// Protocol 47 (1.8.3 - 1.8.8). Positions are 1/32 block fixed-point ints and
/// names are plain strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct V1_8R3Factory;

impl V1_8R3Factory {
    fn write_position(writer: &mut dyn ByteWrite, position: &Position) {
        to_fixed_point(position.x()).ser(writer);
        to_fixed_point(position.render_y()).ser(writer);
        to_fixed_point(position.z()).ser(writer);
    }
}

impl PacketBuilder for V1_8R3Factory {
    fn revision(&self) -> Revision {
        Revision::V1_8_R3
    }

    // This revision's spawn packet has no UUID field.
    fn build_spawn(
        &self,
        id: EntityId,
        _uuid: &Uuid,
        kind: PhantomKind,
        position: &Position,
    ) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(SPAWN_OBJECT).ser(writer);
            VarInt(id.value()).ser(writer);
            match kind {
                PhantomKind::Text => OBJECT_ARMOR_STAND.ser(writer),
                PhantomKind::Item => OBJECT_ITEM.ser(writer),
            }
            Self::write_position(writer, position);

            // pitch, yaw
            0i8.ser(writer);
            0i8.ser(writer);

            // Object data. A non-zero value tells the client a velocity follows;
            // without it items get a random toss.
            match kind {
                PhantomKind::Item => {
                    1i32.ser(writer);
                    0i16.ser(writer);
                    0i16.ser(writer);
                    0i16.ser(writer);
                }
                PhantomKind::Text => 0i32.ser(writer),
            }

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
            // yaw, pitch, on ground
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

            legacy::byte(writer, INDEX_FLAGS, FLAG_INVISIBLE);
            let visible = !text.is_empty();
            if visible {
                legacy::header(writer, INDEX_CUSTOM_NAME, legacy::TYPE_STRING);
                ser_str(&text.to_legacy_string(), writer);
            }
            legacy::byte(writer, INDEX_CUSTOM_NAME_VISIBLE, u8::from(visible));
            legacy::byte(writer, INDEX_ARMOR_STAND_FLAGS, ARMOR_STAND_MARKER);

            writer.write_byte(legacy::END);
            writer.to_vec()
        })
    }

    fn build_item_update(&self, id: EntityId, appearance: &ItemAppearance) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(ENTITY_METADATA).ser(writer);
            VarInt(id.value()).ser(writer);

            legacy::header(writer, INDEX_ITEM, legacy::TYPE_SLOT);
            (appearance.item_id() as i16).ser(writer);
            1i8.ser(writer);
            appearance.damage().ser(writer);
            // no NBT
            writer.write_byte(0x00);

            writer.write_byte(legacy::END);
            writer.to_vec()
        })
    }

    fn build_mount(&self, passenger: EntityId, vehicle: EntityId) -> Vec<u8> {
        with_pooled_writer(|writer| {
            VarInt(ATTACH_ENTITY).ser(writer);
            passenger.value().ser(writer);
            vehicle.value().ser(writer);
            // not a leash
            false.ser(writer);
            writer.to_vec()
        })
    }
}
