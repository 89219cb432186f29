const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Data-space bounds of a chart, shared by the file renderer and the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Maps a data point into the unit square, (0, 0) being bottom-left.
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.x_min) / self.x_span(),
            (y - self.y_min) / self.y_span(),
        )
    }
}

fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo >= MIN_SPAN {
        (lo, hi)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid - MIN_SPAN * 0.5, mid + MIN_SPAN * 0.5)
    }
}

/// Angles bound the x axis exactly. The y axis always contains zero and is
/// padded above and below the data.
pub fn axis_window(angles_deg: &[f64], ranges_m: &[f64]) -> AxisWindow {
    let (x_min, x_max) = finite_bounds(angles_deg).unwrap_or((0.0, 90.0));
    let (x_min, x_max) = widen(x_min, x_max);

    let (raw_lo, raw_hi) = finite_bounds(ranges_m).unwrap_or((0.0, 0.0));
    let raw_lo = raw_lo.min(0.0);
    let raw_hi = raw_hi.max(0.0);
    let pad = (raw_hi - raw_lo).max(MIN_SPAN) * Y_PADDING_RATIO;
    let y_min = if raw_lo < 0.0 { raw_lo - pad } else { 0.0 };
    let y_max = raw_hi + pad;

    AxisWindow {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
