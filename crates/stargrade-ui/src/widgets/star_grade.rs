use stargrade_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::star::{GradeError, StarLayout};
use crate::widget::Widget;

/// A non-interactive five-star rating row.
///
/// The grade is validated on construction; layout happens on every paint.
///
/// # Example
/// ```rust,ignore
/// StarGrade::new(3.6)?
///     .aspect(50.0)
///     .space(10.0)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StarGrade {
    grade: f32,
    /// Side length of each star cell.
    aspect: f32,
    /// Horizontal gap between cells.
    space: f32,
}

impl StarGrade {
    pub fn new(grade: f32) -> Result<Self, GradeError> {
        let grade = GradeError::check(grade)?;
        Ok(Self { grade, aspect: 20.0, space: 0.0 })
    }

    pub fn aspect(mut self, v: f32) -> Self { self.aspect = v; self }
    pub fn space(mut self, v: f32) -> Self { self.space = v; self }

    /// Natural size: `aspect * 5 + space * 4` by `aspect`.
    #[inline]
    pub fn size(&self) -> Vec2 {
        StarLayout::container_size(self.aspect, self.space)
    }

    /// Cell layout for the current settings.
    pub fn layout(&self) -> StarLayout {
        StarLayout::from_checked(self.grade, self.aspect, self.space)
    }
}

impl Widget for StarGrade {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for shape in self.layout().shapes() {
            let shape = shape.translated(rect.origin);
            let border = shape.border();
            painter.fill_path(shape.path, shape.fill, Some(border));
        }
    }
}
