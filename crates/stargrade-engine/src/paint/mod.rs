//! Paint model shared between UI and output backends.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources for fills and strokes
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Paint source for filling or stroking geometry.
///
/// Only solid colors are needed today. New sources are added as variants so
/// backends keep a single dispatch point.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
}

impl Paint {
    /// Returns `false` when drawing with this paint would leave no trace.
    #[inline]
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a > 0.0,
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
