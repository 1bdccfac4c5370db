use super::{ArcSpan, PixelSink};
use crate::data_types::Color;
use crate::utils::GridRound;
use glam::DVec2;
use std::f64::consts::{PI, TAU};
use tracing::warn;

/// Angular increment of the filled-circle sweep, in radians (about 0.57°).
///
/// Cells further than `1 / FILL_ANGLE_STEP` (100) units from the center can
/// fall between two samples. Pie slices are drawn with this sampling density.
pub const FILL_ANGLE_STEP: f64 = 0.01;

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Into `[0, 360)`. Unlike `rem_euclid` this never yields 360 for tiny
/// negative inputs.
fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Forward arc used to accept or reject outline candidates.
///
/// Both ends are normalized into `[0, 360)`. An end that lands before the
/// start is pushed one turn forward, so the window may reach past 360°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularWindow {
    start: f64,
    end: f64,
}

impl AngularWindow {
    pub fn new(span: ArcSpan) -> Self {
        let start = normalize_degrees(span.start_angle);
        let mut end = normalize_degrees(span.end_angle);
        // A whole turn normalizes onto its own start; keep it a whole turn.
        if end < start || (end == start && span.end_angle != span.start_angle) {
            end += 360.0;
        }
        Self { start, end }
    }

    /// Window bounds in degrees, `start` in `[0, 360)`.
    pub fn degrees(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Tests an angle in radians as returned by `atan2`. Both ends inclusive.
    pub fn contains(&self, angle: f64) -> bool {
        let angle = (angle + TAU) % TAU;
        let start = to_radians(self.start);
        let end = to_radians(self.end);
        (angle >= start && angle <= end) || (self.end > 360.0 && angle <= end - TAU)
    }
}

fn finite_circle(center: DVec2, radius: f64, span: &ArcSpan) -> bool {
    if center.is_finite() && radius.is_finite() && span.is_finite() {
        return true;
    }
    warn!(?center, radius, ?span, "skipping circle with non-finite input");
    false
}

/// Midpoint-circle outline restricted to `span`.
///
/// With `thickness == 1` each accepted candidate is written as is. Thicker
/// outlines write `thickness` copies of each candidate, its offset from the
/// center scaled by `(radius + r) / radius` for `r` in `0..thickness` and
/// rounded to the grid. Gaps between the copies are not filled.
pub fn outlined_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: DVec2,
    radius: f64,
    color: Color,
    span: ArcSpan,
    thickness: u32,
) {
    if !finite_circle(center, radius, &span) {
        return;
    }
    let window = AngularWindow::new(span);

    let mut x = radius;
    let mut y = 0.0;
    let mut err = 0.0;

    while x >= y {
        let octants = [
            DVec2::new(x, y),
            DVec2::new(-x, y),
            DVec2::new(-x, -y),
            DVec2::new(x, -y),
            DVec2::new(y, x),
            DVec2::new(-y, x),
            DVec2::new(-y, -x),
            DVec2::new(y, -x),
        ];

        for offset in octants {
            if !window.contains(offset.y.atan2(offset.x)) {
                continue;
            }
            if thickness == 1 {
                sink.set_pixel(center + offset, color);
                continue;
            }
            for r in 0..thickness {
                let ratio = if radius == 0.0 {
                    1.0
                } else {
                    (radius + r as f64) / radius
                };
                sink.set_pixel((center + offset * ratio).round_half_up(), color);
            }
        }

        y += 1.0;
        err += 1.0 + 2.0 * y;
        if 2.0 * (err - x) + 1.0 > 0.0 {
            x -= 1.0;
            err += 1.0 - 2.0 * x;
        }
    }
}

/// One ring of the filled-circle sweep, `from..=to` radians.
fn sweep<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: DVec2,
    r: f64,
    from: f64,
    to: f64,
    color: Color,
) {
    let mut angle = from;
    while angle <= to {
        let pos = center + DVec2::new(angle.cos(), angle.sin()) * r;
        sink.set_pixel(pos.round_half_up(), color);
        angle += FILL_ANGLE_STEP;
    }
}

/// Filled disc or sector, sampled ring by ring.
///
/// For every whole radius `r` in `0..=radius` the angle sweeps from the start
/// to the end of `span` in [`FILL_ANGLE_STEP`] increments. Angles are not
/// normalized: an end past 360° adds a second sweep over `[0, end - 360°]`,
/// and an end before the start draws nothing.
pub fn filled_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: DVec2,
    radius: f64,
    color: Color,
    span: ArcSpan,
) {
    if !finite_circle(center, radius, &span) {
        return;
    }
    let start = to_radians(span.start_angle);
    let end = to_radians(span.end_angle);

    let mut r = 0.0;
    while r <= radius {
        sweep(sink, center, r, start, end, color);
        if span.end_angle > 360.0 {
            sweep(sink, center, r, 0.0, end - TAU, color);
        }
        r += 1.0;
    }
}
