//! Star rating core: path geometry, grade layout and per-style shapes.
//!
//! Data flow for one render:
//! 1. [`StarLayout::new`] turns a grade into five [`StarCell`]s
//! 2. each cell expands into one or two [`StarShape`]s via [`star_shapes`]
//! 3. the widget paints the shapes in order

mod error;
mod layout;
mod path;
mod shape;

pub use error::GradeError;
pub use layout::{StarCell, StarLayout};
pub use path::{half_star_path, star_path};
pub use shape::{StarShape, star_shapes};

/// Visual state of a single star cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StarStyle {
    /// Filled star.
    Full,
    /// Half-filled star, painted over an empty backdrop.
    Half,
    /// Outline only.
    Empty,
}
