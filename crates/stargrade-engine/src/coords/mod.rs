//! Coordinate and geometry types shared across the renderers and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod path;
mod rect;
mod vec2;
mod viewport;

pub use path::Path;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
