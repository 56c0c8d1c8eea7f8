use std::fmt;

/// Identifies one connected observer (a player client). Assigned by the host;
/// the server never creates these itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ObserverKey(u64);

impl ObserverKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ObserverKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ObserverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer {}", self.0)
    }
}
