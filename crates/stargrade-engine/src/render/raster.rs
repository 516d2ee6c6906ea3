use std::path::Path as FsPath;

use anyhow::{Context, Result};
use resvg::{tiny_skia, usvg};

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::DrawList;

use super::svg;

/// Renders an SVG document into a new pixmap sized to the document.
pub fn rasterize(svg_text: &str) -> Result<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_str(svg_text, &usvg::Options::default())
        .context("failed to parse SVG document")?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("SVG document has zero size")?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    log::debug!("raster: rendered {}x{} pixmap", size.width(), size.height());
    Ok(pixmap)
}

/// Serializes and rasterizes a draw list in one step.
pub fn render_draw_list(
    list: &DrawList,
    viewport: Viewport,
    background: Option<Color>,
) -> Result<tiny_skia::Pixmap> {
    anyhow::ensure!(viewport.is_valid(), "viewport has zero or non-finite size");
    rasterize(&svg::to_svg(list, viewport, background))
}

/// Writes `pixmap` to `path`; the image format follows the file extension.
pub fn save_image(pixmap: &tiny_skia::Pixmap, path: &FsPath) -> Result<()> {
    // tiny-skia stores premultiplied pixels; image files expect straight alpha.
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .context("pixel buffer does not match pixmap size")?;
    img.save(path)
        .with_context(|| format!("failed to write image {}", path.display()))?;

    log::debug!("raster: wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Path, Vec2};
    use crate::paint::Paint;

    fn triangle() -> Path {
        Path::polygon([Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), Vec2::new(0.0, 20.0)])
    }

    #[test]
    fn filled_polygon_covers_interior_only() {
        let mut list = DrawList::new();
        list.push_path(triangle(), Paint::Solid(Color::BLACK), None);

        let pixmap = render_draw_list(&list, Viewport::new(20.0, 20.0), None).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (20, 20));

        let inside = pixmap.pixel(3, 3).unwrap();
        assert_eq!(inside.alpha(), 255);
        assert_eq!(inside.red(), 0);

        let outside = pixmap.pixel(18, 18).unwrap();
        assert_eq!(outside.alpha(), 0);
    }

    #[test]
    fn background_fills_whole_pixmap() {
        let list = DrawList::new();
        let pixmap = render_draw_list(&list, Viewport::new(4.0, 4.0), Some(Color::WHITE)).unwrap();
        let px = pixmap.pixel(2, 2).unwrap();
        assert_eq!((px.red(), px.alpha()), (255, 255));
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let list = DrawList::new();
        assert!(render_draw_list(&list, Viewport::new(0.0, 10.0), None).is_err());
    }

    #[test]
    fn save_image_writes_png() {
        let mut list = DrawList::new();
        list.push_path(triangle(), Paint::Solid(Color::BLACK), None);
        let pixmap = render_draw_list(&list, Viewport::new(20.0, 20.0), None).unwrap();

        let path = std::env::temp_dir().join(format!("stargrade-raster-{}.png", std::process::id()));
        save_image(&pixmap, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (20, 20));
        assert_eq!(decoded.get_pixel(3, 3).0, [0, 0, 0, 255]);
        let _ = std::fs::remove_file(&path);
    }
}
