use crate::coords::{Path, Rect};
use crate::paint::{Color, Paint};

/// Stroke drawn along the outline of a shape, centered on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Axis-aligned fill, used for view backgrounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

/// Closed polygon. The fill is painted first, then the border on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub fill: Paint,
    pub border: Option<Border>,
}

/// Backend-agnostic draw command.
///
/// New shapes get a payload struct and a variant here, plus a matching arm in
/// `render::svg`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Path(PathCmd),
}
