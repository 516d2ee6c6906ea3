use std::fmt::Write as _;

use crate::coords::{Path, Viewport};
use crate::paint::{Color, Paint};
use crate::scene::{Border, DrawCmd, DrawList, PathCmd, RectCmd};

/// Serializes `list` into a standalone SVG document of size `viewport`.
///
/// Commands are written in paint order, so later elements cover earlier ones.
/// `background` fills the whole document first when given.
pub fn to_svg(list: &DrawList, viewport: Viewport, background: Option<Color>) -> String {
    let w = num(viewport.width);
    let h = num(viewport.height);

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));

    if let Some(color) = background {
        out.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" {}/>\n",
            fill_attrs(&Paint::Solid(color))
        ));
    }

    for cmd in list.commands() {
        match cmd {
            DrawCmd::Rect(cmd) => out.push_str(&rect_element(cmd)),
            DrawCmd::Path(cmd) => out.push_str(&path_element(cmd)),
        }
    }

    out.push_str("</svg>\n");
    log::debug!("svg: serialized {} draw commands into {w}x{h} document", list.len());
    out
}

/// SVG path data (`M … L … Z`) for a closed polygon.
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for (i, p) in path.points().iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{op} {} {}", num(p.x), num(p.y));
    }
    if path.is_closed() {
        d.push_str(" Z");
    }
    d
}

fn rect_element(cmd: &RectCmd) -> String {
    format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
        num(cmd.rect.origin.x),
        num(cmd.rect.origin.y),
        num(cmd.rect.size.x),
        num(cmd.rect.size.y),
        fill_attrs(&cmd.paint),
    )
}

fn path_element(cmd: &PathCmd) -> String {
    format!(
        "  <path d=\"{}\" {}{}/>\n",
        path_data(&cmd.path),
        fill_attrs(&cmd.fill),
        stroke_attrs(cmd.border.as_ref()),
    )
}

fn fill_attrs(paint: &Paint) -> String {
    if !paint.is_visible() {
        return "fill=\"none\" ".to_string();
    }
    match paint {
        Paint::Solid(c) => {
            let (hex, opacity) = color_attr(*c);
            format!("fill=\"{hex}\" fill-opacity=\"{opacity}\" ")
        }
    }
}

fn stroke_attrs(border: Option<&Border>) -> String {
    match border {
        Some(b) if b.width > 0.0 && b.color.a > 0.0 => {
            let (hex, opacity) = color_attr(b.color);
            format!(
                "stroke=\"{hex}\" stroke-opacity=\"{opacity}\" stroke-width=\"{}\" stroke-linejoin=\"miter\" ",
                num(b.width)
            )
        }
        _ => String::new(),
    }
}

fn color_attr(color: Color) -> (String, String) {
    let [r, g, b, a] = color.to_srgb_u8();
    (format!("#{r:02x}{g:02x}{b:02x}"), num(a as f32 / 255.0))
}

/// Compact decimal: at most three fractional digits, no trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
