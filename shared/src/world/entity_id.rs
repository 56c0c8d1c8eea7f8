use std::fmt;

// EntityId
/// Numeric entity identifier shared with the host's own entities
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct EntityId(i32);

impl EntityId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// CarrierId
/// Identifier of a real host entity that an item holder rides on
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct CarrierId(i32);

impl CarrierId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<CarrierId> for EntityId {
    fn from(value: CarrierId) -> Self {
        EntityId(value.0)
    }
}
