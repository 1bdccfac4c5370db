//! Value-to-grid scales used by the charts.

/// Linear mapping from a value domain onto a grid range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A zero-width domain is widened by 0.5 on each side.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        if (d1 - d0).abs() < f64::EPSILON {
            d0 -= 0.5;
            d1 += 0.5;
        }
        Self {
            domain: (d0, d1),
            range,
        }
    }

    /// Value axis of a chart: `0..=max` onto `bottom..=top`.
    pub fn value_axis(max: f64, bottom: f64, top: f64) -> Self {
        Self::new((0.0, max), (bottom, top))
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}
