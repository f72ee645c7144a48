/// An axis aligned rectangle, `x2 >= x1` and `y2 >= y1`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rect of a `width` x `height` picture with its top-left at `(x, y)`
    pub const fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// True if the intersection has area. Rects that only share an edge or a
    /// corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        intersects(self.x1, self.x2, other.x1, other.x2)
            && intersects(self.y1, self.y2, other.y1, other.y2)
    }
}

#[inline]
fn intersects(p_low: i32, p_high: i32, q_low: i32, q_high: i32) -> bool {
    p_high.min(q_high) > p_low.max(q_low)
}
