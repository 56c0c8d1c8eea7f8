use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde};

pub const VAR_INT_MAX_BYTES: usize = 5;

const SEGMENT_BITS: u32 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// A 32-bit integer written 7 bits at a time, least significant group first,
/// with the high bit of each byte flagging that another byte follows.
/// Negative values are encoded through their two's complement bit pattern and
/// so always take five bytes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct VarInt(pub i32);

impl VarInt {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i32 {
        self.0
    }

    /// Number of bytes this value occupies on the wire
    pub fn encoded_len(&self) -> usize {
        let mut value = self.0 as u32;
        let mut length = 1;
        while value & !SEGMENT_BITS != 0 {
            value >>= 7;
            length += 1;
        }
        length
    }
}

impl From<i32> for VarInt {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<VarInt> for i32 {
    fn from(value: VarInt) -> Self {
        value.0
    }
}

impl Serde for VarInt {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        let mut value = self.0 as u32;
        loop {
            if value & !SEGMENT_BITS == 0 {
                writer.write_byte(value as u8);
                return;
            }
            writer.write_byte((value & SEGMENT_BITS) as u8 | CONTINUE_BIT);
            value >>= 7;
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let start = reader.offset();
        let mut value: u32 = 0;
        for position in 0..VAR_INT_MAX_BYTES {
            let byte = reader.read_byte()?;
            // the fifth byte carries the top 4 bits and ends the value
            if position == VAR_INT_MAX_BYTES - 1 && byte & 0xF0 != 0 {
                return Err(SerdeErr::VarIntTooLong { offset: start });
            }
            value |= ((byte & 0x7F) as u32) << (7 * position);
            if byte & CONTINUE_BIT == 0 {
                return Ok(Self(value as i32));
            }
        }
        Err(SerdeErr::VarIntTooLong { offset: start })
    }

    fn byte_length(&self) -> u32 {
        self.encoded_len() as u32
    }
}
