//! Stargrade engine crate.
//!
//! This crate owns the geometry, paint and draw-stream pieces used by higher
//! layers, plus the output backends (SVG export and rasterization).

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
