use stargrade_engine::coords::{Path, Rect, Vec2};
use stargrade_engine::paint::Color;
use stargrade_engine::scene::Border;

use super::StarStyle;
use super::path::{half_star_path, star_path};

/// Empty stars are drawn in a slightly smaller box so their thick outline
/// stays inside the cell.
const EMPTY_INSET_X: f32 = 0.03;
const EMPTY_INSET_Y: f32 = 0.04;
const EMPTY_SCALE: f32 = 0.94;
const EMPTY_LINE_WIDTH: f32 = 0.04;

const FILLED_LINE_WIDTH: f32 = 1.0;

/// One drawable star outline with its fill and stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StarShape {
    pub path: Path,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
}

impl StarShape {
    #[inline]
    pub fn border(&self) -> Border {
        Border::new(self.line_width, self.stroke)
    }

    /// Same shape moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self { path: self.path.translated(offset), ..self.clone() }
    }
}

/// Box an empty star is drawn in, for a cell of side `aspect` at `origin`.
pub(crate) fn empty_star_rect(origin: Vec2, aspect: f32) -> Rect {
    Rect::square(
        Vec2::new(origin.x + aspect * EMPTY_INSET_X, origin.y + aspect * EMPTY_INSET_Y),
        aspect * EMPTY_SCALE,
    )
}

fn empty_star(origin: Vec2, aspect: f32) -> StarShape {
    StarShape {
        path: star_path(empty_star_rect(origin, aspect)),
        fill: Color::transparent(),
        stroke: Color::BLACK,
        line_width: aspect * EMPTY_LINE_WIDTH,
    }
}

/// Shapes for one cell of side `aspect` at `origin`, back-to-front.
///
/// - `Full`: one filled star
/// - `Half`: an empty backdrop followed by the filled half star on top
/// - `Empty`: one outlined star in the inset box
pub fn star_shapes(style: StarStyle, origin: Vec2, aspect: f32) -> Vec<StarShape> {
    let cell = Rect::square(origin, aspect);
    match style {
        StarStyle::Full => vec![StarShape {
            path: star_path(cell),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: FILLED_LINE_WIDTH,
        }],
        StarStyle::Half => vec![
            empty_star(origin, aspect),
            StarShape {
                path: half_star_path(cell),
                fill: Color::BLACK,
                stroke: Color::BLACK,
                line_width: FILLED_LINE_WIDTH,
            },
        ],
        StarStyle::Empty => vec![empty_star(origin, aspect)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn full_is_one_filled_star() {
        let shapes = star_shapes(StarStyle::Full, Vec2::zero(), 50.0);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].path.len(), 10);
        assert_eq!(shapes[0].fill, Color::BLACK);
        assert_eq!(shapes[0].stroke, Color::BLACK);
        assert_eq!(shapes[0].line_width, 1.0);
    }

    #[test]
    fn half_is_backdrop_then_half_star() {
        let shapes = star_shapes(StarStyle::Half, Vec2::new(120.0, 0.0), 50.0);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0], star_shapes(StarStyle::Empty, Vec2::new(120.0, 0.0), 50.0)[0]);
        assert_eq!(shapes[1].path.len(), 6);
        assert_eq!(shapes[1].fill, Color::BLACK);
        assert_eq!(shapes[1].line_width, 1.0);
    }

    #[test]
    fn empty_is_transparent_outline_scaled_to_aspect() {
        let shapes = star_shapes(StarStyle::Empty, Vec2::zero(), 50.0);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].fill.a, 0.0);
        assert_eq!(shapes[0].stroke, Color::BLACK);
        assert!(approx(shapes[0].line_width, 2.0));
    }

    #[test]
    fn empty_box_is_inset_and_scaled() {
        let rect = empty_star_rect(Vec2::new(60.0, 0.0), 50.0);
        assert!(approx(rect.origin.x, 61.5));
        assert!(approx(rect.origin.y, 2.0));
        assert!(approx(rect.size.x, 47.0));
        assert!(approx(rect.size.y, 47.0));
    }

    #[test]
    fn empty_star_sits_strictly_inside_its_cell() {
        let origin = Vec2::new(60.0, 10.0);
        let cell = Rect::square(origin, 50.0);
        assert!(cell.strictly_contains(empty_star_rect(origin, 50.0)));

        let bounds = star_shapes(StarStyle::Empty, origin, 50.0)[0].path.bounds().unwrap();
        assert!(cell.strictly_contains(bounds));
    }

    #[test]
    fn translated_keeps_styling() {
        let shape = &star_shapes(StarStyle::Empty, Vec2::zero(), 50.0)[0];
        let moved = shape.translated(Vec2::new(17.0, 100.0));
        assert_eq!(moved.line_width, shape.line_width);
        assert!(approx(moved.path.points()[0].x, shape.path.points()[0].x + 17.0));
    }
}
