//! Scene (draw stream) types.
//!
//! A [`DrawList`] is an owned, ordered list of [`DrawCmd`]s. Backends paint it
//! front to back in insertion order: later commands cover earlier ones.

mod cmd;
mod list;

pub use cmd::{Border, DrawCmd, PathCmd, RectCmd};
pub use list::DrawList;
