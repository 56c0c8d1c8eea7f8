/// Identifies the hologram line that owns a phantom entity. Assigned by the
/// line layer above this crate; carried back out in events so callbacks can be
/// routed to the right line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LineKey(u64);

impl LineKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
