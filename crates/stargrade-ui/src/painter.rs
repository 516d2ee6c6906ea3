use stargrade_engine::coords::{Path, Rect};
use stargrade_engine::paint::{Color, Paint};
use stargrade_engine::scene::{Border, DrawList};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Calls are recorded in order, so widgets
/// paint back-to-front by drawing backgrounds and backdrops first.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_rect(rect, color);
    }

    /// Closed polygon: `fill` painted first, then the optional border stroke.
    pub fn fill_path(&mut self, path: Path, fill: impl Into<Paint>, border: Option<Border>) {
        self.draw_list.push_path(path, fill.into(), border);
    }
}
