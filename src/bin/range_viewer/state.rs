use parabolic_range::core::sweep::{RangeSweep, sweep};
use parabolic_range::core::window::axis_window;
use parabolic_range::core::{AngleDomain, AxisWindow, ChartSpec, PhysicalConstants};
use tracing::{debug, warn};

use crate::constants::{GRAVITY_RANGE_MPS2, INPUT_STEPS_PER_UNIT, SPEED_RANGE_MPS};

/// Rounds a control value to the panel's resolution so widened slider
/// floats do not leak noise digits into the title.
pub(crate) fn snap(value: f64) -> f64 {
    (value * INPUT_STEPS_PER_UNIT).round() / INPUT_STEPS_PER_UNIT
}

pub(crate) struct ViewerState {
    pub(crate) speed_mps: f64,
    pub(crate) gravity_mps2: f64,
    pub(crate) domain: AngleDomain,
    pub(crate) sweep: RangeSweep,
    pub(crate) window: AxisWindow,
    pub(crate) spec: ChartSpec,
    evaluated_at: (f64, f64),
}

impl ViewerState {
    pub(crate) fn new() -> Self {
        let constants = PhysicalConstants::default();
        let domain = AngleDomain::default();
        let sweep = sweep(&domain, constants);
        let window = axis_window(sweep.angles(), sweep.ranges());
        let speed_mps = constants.speed_mps();
        let gravity_mps2 = constants.gravity_mps2();
        Self {
            speed_mps,
            gravity_mps2,
            domain,
            sweep,
            window,
            spec: ChartSpec::for_speed(speed_mps),
            evaluated_at: (speed_mps, gravity_mps2),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn clamp_inputs(&mut self) {
        self.speed_mps = snap(self.speed_mps.clamp(SPEED_RANGE_MPS.0, SPEED_RANGE_MPS.1));
        self.gravity_mps2 =
            snap(self.gravity_mps2.clamp(GRAVITY_RANGE_MPS2.0, GRAVITY_RANGE_MPS2.1));
    }

    /// Re-evaluates the sweep when a slider or hotkey moved a parameter.
    /// Returns whether anything was rebuilt.
    pub(crate) fn refresh(&mut self) -> bool {
        if self.evaluated_at == (self.speed_mps, self.gravity_mps2) {
            return false;
        }
        self.evaluated_at = (self.speed_mps, self.gravity_mps2);

        let constants = match PhysicalConstants::new(self.gravity_mps2, self.speed_mps) {
            Ok(constants) => constants,
            Err(err) => {
                warn!("keeping previous sweep: {err}");
                return false;
            }
        };

        self.sweep = sweep(&self.domain, constants);
        self.window = axis_window(self.sweep.angles(), self.sweep.ranges());
        self.spec = ChartSpec::for_speed(self.speed_mps);
        debug!(
            speed_mps = self.speed_mps,
            gravity_mps2 = self.gravity_mps2,
            "sweep refreshed"
        );
        true
    }
}
