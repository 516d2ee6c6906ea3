use stargrade_engine::coords::{Rect, Vec2};
use stargrade_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A host view: solid background with children placed at fixed offsets.
///
/// Each child is sized to its natural size and positioned at its offset from
/// the canvas origin. Children are painted in insertion order.
pub struct Canvas {
    background: Color,
    children: Vec<(Vec2, Element)>,
}

impl Canvas {
    pub fn new(background: Color) -> Self {
        Self { background, children: Vec::new() }
    }

    /// Adds `child` with its top-left corner at `offset`.
    pub fn child(mut self, offset: Vec2, child: impl Into<Element>) -> Self {
        self.children.push((offset, child.into()));
        self
    }
}

impl Widget for Canvas {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let extent = self.children.iter().fold(Vec2::zero(), |acc, (offset, child)| {
            let size = child.measure(Constraints::unbounded());
            Vec2::new(acc.x.max(offset.x + size.x), acc.y.max(offset.y + size.y))
        });
        constraints.constrain(extent)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.background.a > 0.0 {
            painter.fill_rect(rect, self.background);
        }
        for (offset, child) in &self.children {
            let size = child.measure(Constraints::unbounded());
            let frame = Rect::from_origin_size(rect.origin + *offset, size);
            child.paint(painter, frame);
        }
    }
}
