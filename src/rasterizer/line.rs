use super::PixelSink;
use crate::data_types::Color;
use crate::utils::GridRound;
use glam::DVec2;
use tracing::warn;

/// Largest endpoint magnitude whose coordinate differences still fit in `i64`.
const MAX_COORD: f64 = (i64::MAX / 2) as f64;

/// Bresenham line between the rounded endpoints, both ends included.
///
/// Endpoints are stepped in a fixed order (smaller `x`, then smaller `y`,
/// first) so `A → B` and `B → A` light the same cells.
pub fn line<S: PixelSink + ?Sized>(sink: &mut S, start: DVec2, end: DVec2, color: Color) {
    let in_range = |p: DVec2| p.is_finite() && p.abs().max_element() <= MAX_COORD;
    if !in_range(start) || !in_range(end) {
        warn!(?start, ?end, "skipping line with out-of-range endpoint");
        return;
    }
    let a = start.round_half_up();
    let b = end.round_half_up();
    let (from, to) = if (b.x, b.y) < (a.x, a.y) { (b, a) } else { (a, b) };

    let (mut x0, mut y0) = (from.x as i64, from.y as i64);
    let (x1, y1) = (to.x as i64, to.y as i64);
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        sink.set_pixel(DVec2::new(x0 as f64, y0 as f64), color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
