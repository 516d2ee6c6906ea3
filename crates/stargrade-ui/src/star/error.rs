use std::fmt;

/// Rejected grade input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeError {
    /// Grade below 0, above 5, or NaN.
    OutOfRange(f32),
}

impl GradeError {
    /// Accepts grades in the closed range `[0, 5]`.
    pub(crate) fn check(grade: f32) -> Result<f32, GradeError> {
        if (0.0..=5.0).contains(&grade) {
            Ok(grade)
        } else {
            Err(GradeError::OutOfRange(grade))
        }
    }
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::OutOfRange(g) => write!(f, "invalid grade {g}: expected a value in [0, 5]"),
        }
    }
}

impl std::error::Error for GradeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(GradeError::check(0.0), Ok(0.0));
        assert_eq!(GradeError::check(5.0), Ok(5.0));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(GradeError::check(-0.1), Err(GradeError::OutOfRange(-0.1)));
        assert_eq!(GradeError::check(5.1), Err(GradeError::OutOfRange(5.1)));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(GradeError::check(f32::NAN), Err(GradeError::OutOfRange(g)) if g.is_nan()));
    }

    #[test]
    fn display_names_the_grade() {
        assert_eq!(
            GradeError::OutOfRange(7.5).to_string(),
            "invalid grade 7.5: expected a value in [0, 5]"
        );
    }
}
