//! Output backends.
//!
//! Backends consume `scene` draw streams in paint order:
//! - [`svg`] serializes them to an SVG document
//! - [`raster`] renders that document to pixels and writes image files
//!
//! Geometry stays in logical pixels (top-left origin, +Y down); one logical
//! pixel maps to one output pixel.

pub mod raster;
pub mod svg;
