pub mod canvas;
pub mod star_grade;
