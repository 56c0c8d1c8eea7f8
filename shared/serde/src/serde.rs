use crate::{byte_counter::ByteCounter, byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr};

/// A value with a fixed representation on the host wire format
pub trait Serde: Sized {
    /// Serialize Self to a ByteWrite
    fn ser(&self, writer: &mut dyn ByteWrite);

    /// Parse Self from a ByteReader
    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` would write
    fn byte_length(&self) -> u32 {
        let mut counter = ByteCounter::new();
        self.ser(&mut counter);
        counter.byte_count()
    }
}
