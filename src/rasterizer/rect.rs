use super::PixelSink;
use crate::data_types::Color;
use glam::DVec2;
use tracing::warn;

/// Unit steps up from `from`. Ends once adding 1 no longer changes the value.
fn unit_steps(from: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(from), |v| {
        let next = v + 1.0;
        (next > *v).then_some(next)
    })
}

/// Inclusive unit steps from `from` to `to`. Empty when `from > to`.
fn steps(from: f64, to: f64) -> impl Iterator<Item = f64> {
    unit_steps(from).take_while(move |v| *v <= to)
}

/// Unit steps from `from` up to, but excluding, `to`.
pub(crate) fn steps_below(from: f64, to: f64) -> impl Iterator<Item = f64> {
    unit_steps(from).take_while(move |v| *v < to)
}

fn finite_corners(start: DVec2, end: DVec2) -> bool {
    if start.is_finite() && end.is_finite() {
        return true;
    }
    warn!(?start, ?end, "skipping rect with non-finite corner");
    false
}

/// Border of the box spanned by `start` and `end`. Coordinates are not
/// rounded. An axis whose range is empty (`start > end`) contributes no
/// edges; the other axis still draws its two.
pub fn outlined_rect<S: PixelSink + ?Sized>(sink: &mut S, start: DVec2, end: DVec2, color: Color) {
    if !finite_corners(start, end) {
        return;
    }
    for x in steps(start.x, end.x) {
        sink.set_pixel(DVec2::new(x, start.y), color);
        sink.set_pixel(DVec2::new(x, end.y), color);
    }
    for y in steps(start.y, end.y) {
        sink.set_pixel(DVec2::new(start.x, y), color);
        sink.set_pixel(DVec2::new(end.x, y), color);
    }
}

/// Every cell of the inclusive box spanned by `start` and `end`.
pub fn filled_rect<S: PixelSink + ?Sized>(sink: &mut S, start: DVec2, end: DVec2, color: Color) {
    if !finite_corners(start, end) {
        return;
    }
    for x in steps(start.x, end.x) {
        for y in steps(start.y, end.y) {
            sink.set_pixel(DVec2::new(x, y), color);
        }
    }
}
