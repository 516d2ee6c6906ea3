//! Stargrade UI — star rating widget on top of `stargrade-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stargrade_ui::prelude::*;
//!
//! // One-shot: a fresh draw list holding the five stars for grade 3.6.
//! let draw_list = render_star_grade(3.6, 50.0, 10.0)?;
//!
//! // Or place the widget inside a host view:
//! let mut scene = UiScene::new();
//! let root = Canvas::new(Color::WHITE)
//!     .child(Vec2::new(17.0, 100.0), StarGrade::new(3.6)?.aspect(50.0).space(10.0));
//! let draw_list = scene.frame_widget(root, Vec2::new(375.0, 250.0));
//! ```

pub mod constraints;
pub mod painter;
pub mod scene;
pub mod star;
pub mod widget;
pub mod widgets;

use stargrade_engine::scene::DrawList;

use crate::scene::UiScene;
use crate::star::GradeError;
use crate::widgets::star_grade::StarGrade;

/// Lays out and paints a five-star row for `grade` into a new draw list.
///
/// The row is anchored at the origin and sized
/// `cell_size * 5 + spacing * 4` by `cell_size`.
pub fn render_star_grade(grade: f32, cell_size: f32, spacing: f32) -> Result<DrawList, GradeError> {
    let widget = StarGrade::new(grade)?.aspect(cell_size).space(spacing);
    let size = widget.size();

    let mut scene = UiScene::new();
    let _ = scene.frame_widget(widget, size);
    Ok(scene.into_draw_list())
}

/// Everything you need to build a star rating view — import this in host code.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::painter::Painter;
    pub use crate::render_star_grade;
    pub use crate::scene::UiScene;
    pub use crate::star::{
        GradeError, StarCell, StarLayout, StarShape, StarStyle, half_star_path, star_path,
        star_shapes,
    };
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{canvas::Canvas, star_grade::StarGrade};

    pub use stargrade_engine::coords::{Path, Rect, Vec2, Viewport};
    pub use stargrade_engine::paint::{Color, Paint};
    pub use stargrade_engine::scene::{Border, DrawList};
}
