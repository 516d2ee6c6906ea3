use super::{Rect, Vec2};

/// Closed polygon path in logical pixels.
///
/// The first point is the move-to; every following point is a line-to, and the
/// path always closes back onto its first point. There is no open variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    /// Builds a closed polygon through `points`, in order.
    pub fn polygon(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self { points: points.into_iter().collect() }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Always true for a path with at least one point.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.points.is_empty()
    }

    /// Same path moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self { points: self.points.iter().map(|&p| p + offset).collect() }
    }

    /// Axis-aligned bounds of all points. `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Rect::from_origin_size(min, max - min))
    }
}
