use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world units. Never rotated.
///
/// World coordinates: x grows rightward, y grows downward, so a rectangle's
/// [`top`](Aabb::top) is its smallest y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge x.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge x.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge y.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Whether two rectangles overlap.
///
/// All four comparisons are strict, so rectangles that merely share an edge
/// or a corner do not count as overlapping.
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
