use std::path::PathBuf;

use clap::Parser;

use crate::playground::Playground;

#[derive(Parser, Debug)]
#[command(name = "stargrade-studio", about = "Render a five-star rating row to SVG or an image file")]
pub struct Cli {
    /// Rating to draw, from 0 to 5.
    #[arg(default_value_t = Playground::DEFAULT_GRADE, allow_negative_numbers = true)]
    pub grade: f32,

    /// Output file; `.svg` writes the document, other extensions are rasterized.
    #[arg(default_value = Playground::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side length of each star cell, in pixels.
    #[arg(long, default_value_t = Playground::DEFAULT_ASPECT)]
    pub aspect: f32,

    /// Gap between neighbouring stars, in pixels.
    #[arg(long, default_value_t = Playground::DEFAULT_SPACE)]
    pub space: f32,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn playground(&self) -> Playground {
        Playground::new()
            .grade(self.grade)
            .aspect(self.aspect)
            .space(self.space)
            .output(&self.output)
    }
}
