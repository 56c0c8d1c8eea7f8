// ByteWrite
pub trait ByteWrite {
    fn write_byte(&mut self, byte: u8);
    fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_byte(*byte);
        }
    }
    fn is_counter(&self) -> bool;
    fn count_bytes(&mut self, bytes: u32);
}

const INITIAL_CAPACITY: usize = 64;

/// A growable byte buffer. Packets built for phantom entities are small, so the
/// writer starts with a modest allocation and doubles as needed. `clear()` keeps
/// the allocation, which is what makes pooling worthwhile.
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Copies the written bytes out, leaving the writer untouched
    pub fn to_vec(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Empties the writer without releasing its allocation
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn reserve_for(&mut self, additional: usize) {
        let required = self.buffer.len() + additional;
        if required <= self.buffer.capacity() {
            return;
        }
        let mut target = self.buffer.capacity().max(INITIAL_CAPACITY);
        while target < required {
            target *= 2;
        }
        self.buffer.reserve_exact(target - self.buffer.len());
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWrite for ByteWriter {
    fn write_byte(&mut self, byte: u8) {
        self.reserve_for(1);
        self.buffer.push(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.reserve_for(bytes.len());
        self.buffer.extend_from_slice(bytes);
    }

    fn is_counter(&self) -> bool {
        false
    }

    fn count_bytes(&mut self, _bytes: u32) {
        panic!("This method should not be called for ByteWriter!");
    }
}
