use stargrade_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — the parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the parent — the widget draws inside it.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget — the universal child type for container widgets.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Element::new(w)
    }
}
