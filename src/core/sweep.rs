use tracing::debug;

use crate::core::ballistics::{DomainError, PhysicalConstants};

pub const DEFAULT_LO_DEG: f64 = 0.0;
pub const DEFAULT_HI_DEG: f64 = 90.0;
pub const DEFAULT_SAMPLES: usize = 100;

/// Evenly spaced launch angles over a closed interval, in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleDomain {
    angles_deg: Vec<f64>,
}

impl AngleDomain {
    pub fn new(lo_deg: f64, hi_deg: f64, samples: usize) -> Result<Self, DomainError> {
        if samples < 2 {
            return Err(DomainError::SampleCount(samples));
        }
        if !lo_deg.is_finite() || !hi_deg.is_finite() || lo_deg > hi_deg {
            return Err(DomainError::AngleInterval {
                lo: lo_deg,
                hi: hi_deg,
            });
        }

        Ok(Self {
            angles_deg: linspace(lo_deg, hi_deg, samples),
        })
    }

    pub fn spacing(&self) -> f64 {
        let last = self.angles_deg.len() - 1;
        (self.angles_deg[last] - self.angles_deg[0]) / last as f64
    }

    pub fn len(&self) -> usize {
        self.angles_deg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles_deg.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.angles_deg
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.angles_deg.iter().copied()
    }
}

impl Default for AngleDomain {
    fn default() -> Self {
        Self {
            angles_deg: linspace(DEFAULT_LO_DEG, DEFAULT_HI_DEG, DEFAULT_SAMPLES),
        }
    }
}

fn linspace(lo: f64, hi: f64, samples: usize) -> Vec<f64> {
    let last = samples - 1;
    let step = (hi - lo) / last as f64;
    (0..samples)
        .map(|i| {
            // Pin the endpoint so accumulated rounding never misses `hi`.
            if i == last { hi } else { lo + (i as f64 * step) }
        })
        .collect()
}

/// Angles paired index-for-index with the ranges they produce.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeSweep {
    constants: PhysicalConstants,
    angles_deg: AngleDomain,
    ranges_m: Vec<f64>,
}

impl RangeSweep {
    pub fn constants(&self) -> PhysicalConstants {
        self.constants
    }

    pub fn angles(&self) -> &[f64] {
        self.angles_deg.as_slice()
    }

    pub fn ranges(&self) -> &[f64] {
        &self.ranges_m
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.angles_deg.iter().zip(self.ranges_m.iter().copied())
    }

    /// Sample with the largest range; the earliest one wins a tie. NaN
    /// ranges never win, and an all-NaN sweep reports its first angle.
    pub fn peak(&self) -> (f64, f64) {
        self.points()
            .filter(|(_, range)| !range.is_nan())
            .fold(None, |best: Option<(f64, f64)>, point| match best {
                Some(b) if b.1 >= point.1 => Some(b),
                _ => Some(point),
            })
            .unwrap_or((self.angles()[0], f64::NAN))
    }
}

pub fn sweep(domain: &AngleDomain, constants: PhysicalConstants) -> RangeSweep {
    let ranges_m: Vec<f64> = domain.iter().map(|a| constants.range_at(a)).collect();
    let result = RangeSweep {
        constants,
        angles_deg: domain.clone(),
        ranges_m,
    };

    let (peak_angle, peak_range) = result.peak();
    debug!(
        samples = result.angles().len(),
        peak_angle_deg = peak_angle,
        peak_range_m = peak_range,
        "evaluated range sweep"
    );

    result
}
