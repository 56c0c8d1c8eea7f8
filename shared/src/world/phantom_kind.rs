/// Height of a text holder's name tag relative to its logical line position
pub const TEXT_OFFSET_Y: f64 = -0.25;
/// Height of an item holder relative to its logical line position
pub const ITEM_OFFSET_Y: f64 = 0.0;

/// The closed set of entities this layer can fake
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhantomKind {
    /// An invisible marker armor stand showing only its custom name
    Text,
    /// A dropped item that can never be picked up
    Item,
}

impl PhantomKind {
    pub fn offset_y(&self) -> f64 {
        match self {
            PhantomKind::Text => TEXT_OFFSET_Y,
            PhantomKind::Item => ITEM_OFFSET_Y,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhantomKind::Text => "text",
            PhantomKind::Item => "item",
        }
    }
}
