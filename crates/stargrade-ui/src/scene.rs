use stargrade_engine::coords::{Rect, Vec2};
use stargrade_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Top-level coordinator that owns the draw list across renders.
///
/// Every [`frame`](Self::frame) clears the previous list and repaints the
/// whole tree into it.
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Convenience: wrap any [`Widget`] in an [`Element`] and call [`frame`](Self::frame).
    pub fn frame_widget<W: Widget>(&mut self, root: W, viewport: Vec2) -> &DrawList {
        self.frame(root.into(), viewport)
    }

    /// Lay out and paint a widget tree for this render.
    ///
    /// The root occupies the full viewport. The returned list is owned by the
    /// scene and valid until the next call.
    pub fn frame(&mut self, root: Element, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let _ = root.measure(Constraints::loose(viewport));
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        log::debug!("scene: frame recorded {} draw items", self.draw_list.len());
        &self.draw_list
    }

    /// Consumes the scene and hands its draw list to the caller.
    pub fn into_draw_list(self) -> DrawList {
        self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::star_grade::StarGrade;

    fn row(grade: f32) -> StarGrade {
        StarGrade::new(grade).unwrap().aspect(50.0).space(10.0)
    }

    #[test]
    fn second_frame_replaces_first() {
        let mut scene = UiScene::new();
        let viewport = Vec2::new(290.0, 50.0);

        assert_eq!(scene.frame_widget(row(3.6), viewport).len(), 6);

        let list = scene.frame_widget(row(2.0), viewport);
        assert_eq!(list.len(), 5);
        let lens: Vec<usize> = list.paths().map(|p| p.path.len()).collect();
        assert_eq!(lens, vec![10; 5]);
        // Two filled stars, then three transparent outlines: nothing left from the 3.6 frame.
        let filled = list.paths().filter(|p| p.fill.is_visible()).count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn frame_after_half_star_drops_backdrop() {
        let mut scene = UiScene::new();
        let viewport = Vec2::new(290.0, 50.0);
        let _ = scene.frame_widget(row(0.5), viewport);
        let _ = scene.frame_widget(row(5.0), viewport);

        assert_eq!(scene.draw_list.len(), 5);
        assert!(scene.draw_list.paths().all(|p| p.path.len() == 10 && p.fill.is_visible()));
    }
}
