use crate::coords::{Path, Rect};
use crate::paint::{Color, Paint};

use super::{Border, DrawCmd, PathCmd, RectCmd};

/// Recorded draw stream for one render.
///
/// The list is rebuilt from scratch on every render: callers [`clear`](Self::clear)
/// it and record the new frame. Commands keep their recording order, which is
/// also their paint order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every recorded command. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Iterates the polygon commands only, in paint order.
    pub fn paths(&self) -> impl Iterator<Item = &PathCmd> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Path(p) => Some(p),
            DrawCmd::Rect(_) => None,
        })
    }

    /// Records a solid rectangle.
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Rect(RectCmd { rect, paint: Paint::Solid(color) }));
    }

    /// Records a closed polygon with its fill and optional border.
    pub fn push_path(&mut self, path: Path, fill: Paint, border: Option<Border>) {
        self.cmds.push(DrawCmd::Path(PathCmd { path, fill, border }));
    }
}
