use stargrade_engine::coords::{Path, Rect, Vec2};

// Star outline points as fractions of the bounding box, clockwise from the
// top. The tail is not listed: its y offset is measured against the box
// *width* (see `tail`), which keeps the inner notch shallow on tall boxes.
const HEAD: (f32, f32) = (0.5, 0.0);
const L1: (f32, f32) = (0.65, 0.33);
const L2: (f32, f32) = (1.0, 0.38);
const L3: (f32, f32) = (0.75, 0.63);
const L4: (f32, f32) = (0.81, 1.0);
const R4: (f32, f32) = (0.19, 1.0);
const R3: (f32, f32) = (0.25, 0.63);
const R2: (f32, f32) = (0.0, 0.38);
const R1: (f32, f32) = (0.35, 0.33);
const TAIL_X: f32 = 0.5;
const TAIL_Y_OF_WIDTH: f32 = 0.82;

#[inline]
fn at(rect: Rect, (fx, fy): (f32, f32)) -> Vec2 {
    rect.at(fx, fy)
}

#[inline]
fn tail(rect: Rect) -> Vec2 {
    Vec2::new(
        rect.origin.x + rect.size.x * TAIL_X,
        rect.origin.y + rect.size.x * TAIL_Y_OF_WIDTH,
    )
}

/// Ten-point star outline inscribed in `rect`.
///
/// Order: head, the four points on the +X side, tail, the four points on the
/// -X side. The path is closed.
pub fn star_path(rect: Rect) -> Path {
    Path::polygon([
        at(rect, HEAD),
        at(rect, L1),
        at(rect, L2),
        at(rect, L3),
        at(rect, L4),
        tail(rect),
        at(rect, R4),
        at(rect, R3),
        at(rect, R2),
        at(rect, R1),
    ])
}

/// Six-point outline of the -X half of [`star_path`]: head, tail, then the
/// four points on that side. The path is closed.
pub fn half_star_path(rect: Rect) -> Path {
    Path::polygon([
        at(rect, HEAD),
        tail(rect),
        at(rect, R4),
        at(rect, R3),
        at(rect, R2),
        at(rect, R1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    fn cell() -> Rect {
        Rect::new(10.0, 20.0, 50.0, 50.0)
    }

    // ── star_path ─────────────────────────────────────────────────────────

    #[test]
    fn full_star_has_ten_closed_points() {
        let path = star_path(cell());
        assert_eq!(path.len(), 10);
        assert!(path.is_closed());
    }

    #[test]
    fn full_star_points_match_layout() {
        let p = star_path(cell());
        let pts = p.points();
        assert!(close(pts[0], Vec2::new(35.0, 20.0)));
        assert!(close(pts[1], Vec2::new(42.5, 36.5)));
        assert!(close(pts[2], Vec2::new(60.0, 39.0)));
        assert!(close(pts[3], Vec2::new(47.5, 51.5)));
        assert!(close(pts[4], Vec2::new(50.5, 70.0)));
        assert!(close(pts[5], Vec2::new(35.0, 61.0)));
        assert!(close(pts[6], Vec2::new(19.5, 70.0)));
        assert!(close(pts[7], Vec2::new(22.5, 51.5)));
        assert!(close(pts[8], Vec2::new(10.0, 39.0)));
        assert!(close(pts[9], Vec2::new(27.5, 36.5)));
    }

    #[test]
    fn tail_offset_uses_box_width() {
        // Wide box: the tail drops by 0.82 * width, below the box's own bottom.
        let p = star_path(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(close(p.points()[5], Vec2::new(50.0, 82.0)));
        assert!(close(p.points()[4], Vec2::new(81.0, 50.0)));
    }

    #[test]
    fn full_star_bounds_fill_square_box() {
        let bounds = star_path(cell()).bounds().unwrap();
        assert!(close(bounds.min(), cell().min()));
        assert!(close(bounds.max(), cell().max()));
    }

    // ── half_star_path ────────────────────────────────────────────────────

    #[test]
    fn half_star_has_six_closed_points() {
        let path = half_star_path(cell());
        assert_eq!(path.len(), 6);
        assert!(path.is_closed());
    }

    #[test]
    fn half_star_shares_head_tail_and_side_with_full_star() {
        let full = star_path(cell());
        let half = half_star_path(cell());
        let (f, h) = (full.points(), half.points());
        assert!(close(h[0], f[0]));
        assert!(close(h[1], f[5]));
        assert!(close(h[2], f[6]));
        assert!(close(h[3], f[7]));
        assert!(close(h[4], f[8]));
        assert!(close(h[5], f[9]));
    }

    #[test]
    fn half_star_stays_on_one_side_of_the_axis() {
        let axis = cell().at(0.5, 0.0).x;
        assert!(half_star_path(cell()).points().iter().all(|p| p.x <= axis + 1e-4));
    }
}
