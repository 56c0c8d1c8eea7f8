use crate::PhantomKind;

/// A point in the world plus the vertical offset at which a given kind of
/// phantom entity renders relative to it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
    z: f64,
    offset_y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            offset_y: 0.0,
        }
    }

    pub fn for_kind(kind: PhantomKind, x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z).with_offset_y(kind.offset_y())
    }

    pub fn with_offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// The y coordinate sent to clients
    pub fn render_y(&self) -> f64 {
        self.y + self.offset_y
    }

    /// Squared distance between the logical points, ignoring offsets
    pub fn distance_squared(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Same logical point and offset as `other`
    pub fn same_as(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.offset_y == other.offset_y
    }
}

/// Converts a coordinate to the 1/32 block fixed-point form, flooring like the
/// client does when it reconstructs the value
pub fn to_fixed_point(value: f64) -> i32 {
    (value * 32.0).floor() as i32
}
