/// What an item holder shows. `item_id` is the item registry id of the running
/// host revision; `damage` is only meaningful before the 1.13 flattening and is
/// ignored by newer revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemAppearance {
    item_id: i32,
    damage: i16,
}

impl ItemAppearance {
    pub fn new(item_id: i32) -> Self {
        Self { item_id, damage: 0 }
    }

    pub fn with_damage(item_id: i32, damage: i16) -> Self {
        Self { item_id, damage }
    }

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn damage(&self) -> i16 {
        self.damage
    }
}
