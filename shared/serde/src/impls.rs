use uuid::Uuid;

use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde, VarInt};

// Every fixed-width value on the host wire is big-endian.
macro_rules! impl_serde_be {
    ($($ty:ty),*) => {
        $(
            impl Serde for $ty {
                fn ser(&self, writer: &mut dyn ByteWrite) {
                    writer.write_bytes(&self.to_be_bytes());
                }

                fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                    Ok(<$ty>::from_be_bytes(reader.read_array()?))
                }

                fn byte_length(&self) -> u32 {
                    std::mem::size_of::<$ty>() as u32
                }
            }
        )*
    };
}

impl_serde_be!(u8, i8, u16, i16, i32, i64, f32, f64);

impl Serde for bool {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(reader.read_byte()? != 0)
    }

    fn byte_length(&self) -> u32 {
        1
    }
}

impl Serde for Uuid {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Uuid::from_bytes(reader.read_array()?))
    }

    fn byte_length(&self) -> u32 {
        16
    }
}

/// Writes `value` as a VarInt byte length followed by its UTF-8 bytes
pub fn ser_str(value: &str, writer: &mut dyn ByteWrite) {
    let bytes = value.as_bytes();
    VarInt(bytes.len() as i32).ser(writer);
    writer.write_bytes(bytes);
}

impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        ser_str(self, writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let offset = reader.offset();
        let length = VarInt::de(reader)?.get();
        if length < 0 {
            return Err(SerdeErr::NegativeLength { offset, length });
        }
        let bytes = reader.read_bytes(length as usize)?;
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| SerdeErr::InvalidUtf8 { offset })
    }
}
