use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Used as the bounding box every star shape is parameterized by.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Square of side `side` anchored at `origin`.
    #[inline]
    pub const fn square(origin: Vec2, side: f32) -> Self {
        Self::from_origin_size(origin, Vec2::new(side, side))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Point at fractional position (`fx`, `fy`) of this box.
    ///
    /// `(0, 0)` is the top-left corner, `(1, 1)` the bottom-right one.
    #[inline]
    pub fn at(self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * fx, self.origin.y + self.size.y * fy)
    }

    /// True when `other` lies inside `self` without touching any edge.
    #[inline]
    pub fn strictly_contains(self, other: Rect) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        b0.x > a0.x && b0.y > a0.y && b1.x < a1.x && b1.y < a1.y
    }
}
