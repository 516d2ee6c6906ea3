use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stargrade_engine::coords::{Vec2, Viewport};
use stargrade_engine::paint::Color;
use stargrade_engine::render::{raster, svg};
use stargrade_ui::prelude::{Canvas, StarGrade, UiScene};

/// Playground scene: a star row placed on a plain host view, written to disk.
///
/// ```rust,ignore
/// Playground::new()
///     .grade(4.5)
///     .output("rating.svg")
///     .run()?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Playground {
    grade: f32,
    aspect: f32,
    space: f32,
    /// Top-left of the star row inside the host view.
    origin: Vec2,
    canvas: Vec2,
    background: Color,
    output: PathBuf,
}

impl Playground {
    pub const DEFAULT_GRADE: f32 = 3.6;
    pub const DEFAULT_ASPECT: f32 = 50.0;
    pub const DEFAULT_SPACE: f32 = 10.0;
    pub const DEFAULT_OUTPUT: &'static str = "stargrade.png";

    pub fn new() -> Self {
        Self {
            grade: Self::DEFAULT_GRADE,
            aspect: Self::DEFAULT_ASPECT,
            space: Self::DEFAULT_SPACE,
            origin: Vec2::new(17.0, 100.0),
            canvas: Vec2::new(375.0, 250.0),
            background: Color::WHITE,
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
        }
    }

    pub fn grade(mut self, v: f32) -> Self { self.grade = v; self }
    pub fn aspect(mut self, v: f32) -> Self { self.aspect = v; self }
    pub fn space(mut self, v: f32) -> Self { self.space = v; self }
    pub fn output(mut self, v: impl Into<PathBuf>) -> Self { self.output = v.into(); self }

    /// Builds the scene and returns its SVG document.
    pub fn render_svg(&self) -> Result<String> {
        let grade = StarGrade::new(self.grade)?.aspect(self.aspect).space(self.space);
        let root = Canvas::new(self.background).child(self.origin, grade);

        let mut scene = UiScene::new();
        let list = scene.frame_widget(root, self.canvas);
        Ok(svg::to_svg(list, self.viewport(), None))
    }

    /// Renders the scene and writes it to the configured output path.
    ///
    /// `.svg` paths receive the SVG text; every other extension is rasterized
    /// and encoded by extension.
    pub fn run(&self) -> Result<()> {
        let document = self.render_svg()?;

        if is_svg(&self.output) {
            std::fs::write(&self.output, document)
                .with_context(|| format!("failed to write {}", self.output.display()))?;
        } else {
            let pixmap = raster::rasterize(&document)?;
            raster::save_image(&pixmap, &self.output)?;
        }

        log::info!(
            "rendered grade {} ({}px stars, {}px spacing) to {}",
            self.grade,
            self.aspect,
            self.space,
            self.output.display()
        );
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.x, self.canvas.y)
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}
