use std::{fmt, ops::BitOr};

/// Host-side behaviors that are switched off for a phantom entity.
///
/// `NO_PERSIST`, `NO_PICKUP` and `INVULNERABLE` are set on every phantom
/// entity for its whole lifetime. `TICK_LOCKED` is the only flag that changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuppressionFlags(u8);

impl SuppressionFlags {
    /// Never written to the world save
    pub const NO_PERSIST: Self = Self(1);
    /// Observers can never pick it up
    pub const NO_PICKUP: Self = Self(1 << 1);
    /// Damage and destruction from the simulation are ignored
    pub const INVULNERABLE: Self = Self(1 << 2);
    /// State broadcasts are held back until unlocked
    pub const TICK_LOCKED: Self = Self(1 << 3);

    pub const fn empty() -> Self {
        Self(0)
    }

    /// The flags every phantom entity starts with
    pub const fn phantom() -> Self {
        Self(Self::NO_PERSIST.0 | Self::NO_PICKUP.0 | Self::INVULNERABLE.0)
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl BitOr for SuppressionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for SuppressionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::NO_PERSIST, "NO_PERSIST"),
            (Self::NO_PICKUP, "NO_PICKUP"),
            (Self::INVULNERABLE, "INVULNERABLE"),
            (Self::TICK_LOCKED, "TICK_LOCKED"),
        ];
        let mut list = f.debug_set();
        for (flag, name) in names {
            if self.contains(flag) {
                list.entry(&format_args!("{}", name));
            }
        }
        list.finish()
    }
}
