use stargrade_engine::coords::{Rect, Vec2};

use super::shape::{StarShape, star_shapes};
use super::{GradeError, StarStyle};

const STAR_COUNT: usize = 5;

/// One of the five star positions in a rating row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarCell {
    pub style: StarStyle,
    /// Top-left of the cell, relative to the row origin.
    pub origin: Vec2,
    /// Side length of the cell's square box.
    pub size: f32,
}

impl StarCell {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.origin, self.size)
    }

    /// Shapes for this cell, back-to-front.
    pub fn shapes(&self) -> Vec<StarShape> {
        star_shapes(self.style, self.origin, self.size)
    }
}

/// Left-to-right layout of a five-star rating row.
///
/// Invariants:
/// - exactly [`StarLayout::STARS`] cells
/// - full cells first, then at most one half cell, then empty cells
/// - cell `i` starts at `i * (cell_size + spacing)`
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayout {
    cells: [StarCell; STAR_COUNT],
    cell_size: f32,
    spacing: f32,
}

impl StarLayout {
    pub const STARS: usize = STAR_COUNT;

    /// Fractional part at or above which a half star is shown.
    pub const HALF_THRESHOLD: f32 = 0.5;

    /// Lays out `grade` as full / half / empty cells.
    ///
    /// Fails for grades outside `[0, 5]`. The integer part gives the full
    /// count; a remainder of at least one half adds a half cell.
    pub fn new(grade: f32, cell_size: f32, spacing: f32) -> Result<Self, GradeError> {
        let grade = GradeError::check(grade)?;
        Ok(Self::from_checked(grade, cell_size, spacing))
    }

    /// Layout for a grade already known to be in `[0, 5]`.
    pub(crate) fn from_checked(grade: f32, cell_size: f32, spacing: f32) -> Self {
        let whole = grade.floor();
        let full = whole as usize;
        let has_half = grade - whole >= Self::HALF_THRESHOLD;
        let step = cell_size + spacing;

        let cells = std::array::from_fn(|i| {
            let style = if i < full {
                StarStyle::Full
            } else if i == full && has_half {
                StarStyle::Half
            } else {
                StarStyle::Empty
            };
            StarCell { style, origin: Vec2::new(step * i as f32, 0.0), size: cell_size }
        });

        log::debug!(
            "star layout: grade={grade} full={full} half={has_half} cell={cell_size} spacing={spacing}"
        );

        Self { cells, cell_size, spacing }
    }

    #[inline]
    pub fn cells(&self) -> &[StarCell; Self::STARS] {
        &self.cells
    }

    /// Number of cells with the given style.
    pub fn count(&self, style: StarStyle) -> usize {
        self.cells.iter().filter(|c| c.style == style).count()
    }

    /// Size of the whole row.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Self::container_size(self.cell_size, self.spacing)
    }

    /// Row size for a given cell size and spacing, independent of the grade.
    #[inline]
    pub fn container_size(cell_size: f32, spacing: f32) -> Vec2 {
        let n = Self::STARS as f32;
        Vec2::new(cell_size * n + spacing * (n - 1.0), cell_size)
    }

    /// All shapes of the row in paint order, relative to the row origin.
    pub fn shapes(&self) -> impl Iterator<Item = StarShape> + '_ {
        self.cells.iter().flat_map(StarCell::shapes)
    }
}
