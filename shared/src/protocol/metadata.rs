//! Entity metadata building blocks shared by the revision factories

/// Entity flags bit: entity is invisible
pub const FLAG_INVISIBLE: u8 = 0x20;
/// Armor stand flags bit: no hitbox, name tag at the entity's feet
pub const ARMOR_STAND_MARKER: u8 = 0x10;

// 1.8 layout: one header byte packing the value type (high 3 bits) and the
// field index (low 5 bits), terminated by 0x7F
pub mod legacy {
    use holo_serde::ByteWrite;

    pub const END: u8 = 0x7F;

    pub const TYPE_BYTE: u8 = 0;
    pub const TYPE_STRING: u8 = 4;
    pub const TYPE_SLOT: u8 = 5;

    pub fn header(writer: &mut dyn ByteWrite, index: u8, value_type: u8) {
        writer.write_byte((value_type << 5) | (index & 0x1F));
    }

    pub fn byte(writer: &mut dyn ByteWrite, index: u8, value: u8) {
        header(writer, index, TYPE_BYTE);
        writer.write_byte(value);
    }
}

// 1.9+ layout: unsigned byte index, VarInt serializer id, value; terminated by
// an index of 0xFF
pub mod modern {
    use holo_serde::{ByteWrite, Serde, VarInt};

    pub const END: u8 = 0xFF;

    pub fn header(writer: &mut dyn ByteWrite, index: u8, serializer: i32) {
        index.ser(writer);
        VarInt(serializer).ser(writer);
    }
}
