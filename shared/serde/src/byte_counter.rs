use crate::ByteWrite;

/// Counts bytes instead of storing them, used to size a value before writing
pub struct ByteCounter {
    bytes: u32,
}

impl ByteCounter {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { bytes: 0 }
    }

    pub fn byte_count(&self) -> u32 {
        self.bytes
    }
}

impl ByteWrite for ByteCounter {
    fn write_byte(&mut self, _: u8) {
        self.bytes += 1;
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes += bytes.len() as u32;
    }

    fn is_counter(&self) -> bool {
        true
    }

    fn count_bytes(&mut self, bytes: u32) {
        self.bytes += bytes;
    }
}
