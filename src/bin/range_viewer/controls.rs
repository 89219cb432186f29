use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    GRAVITY_KEY_RATE_MPS2, GRAVITY_RANGE_MPS2, SPEED_KEY_RATE_MPS, SPEED_RANGE_MPS,
};
use crate::state::{ViewerState, snap};

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn apply_keyboard_adjustments(state: &mut ViewerState, frame_dt: f32) {
    let frame_dt = f64::from(frame_dt);
    if is_key_down(KeyCode::Up) {
        state.speed_mps += SPEED_KEY_RATE_MPS * frame_dt;
    }
    if is_key_down(KeyCode::Down) {
        state.speed_mps -= SPEED_KEY_RATE_MPS * frame_dt;
    }
    if is_key_down(KeyCode::Right) {
        state.gravity_mps2 += GRAVITY_KEY_RATE_MPS2 * frame_dt;
    }
    if is_key_down(KeyCode::Left) {
        state.gravity_mps2 -= GRAVITY_KEY_RATE_MPS2 * frame_dt;
    }
    state.clamp_inputs();
}

pub(crate) fn draw_control_panel(state: &mut ViewerState) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(360.0, 210.0))
        .label("Launch Parameters")
        .ui(&mut *root_ui(), |ui| {
            let mut speed = state.speed_mps as f32;
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                SPEED_RANGE_MPS.0 as f32..SPEED_RANGE_MPS.1 as f32,
                &mut speed,
            );
            let mut gravity = state.gravity_mps2 as f32;
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE_MPS2.0 as f32..GRAVITY_RANGE_MPS2.1 as f32,
                &mut gravity,
            );
            // Only a moved slider writes back, so untouched values keep full precision.
            if speed != state.speed_mps as f32 {
                state.speed_mps = snap(f64::from(speed));
            }
            if gravity != state.gravity_mps2 as f32 {
                state.gravity_mps2 = snap(f64::from(gravity));
            }
            ui.separator();
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            ui.label(
                None,
                &format!(
                    "Max range (45 deg): {:.2} m",
                    state.sweep.constants().max_range()
                ),
            );
            ui.label(None, "Up/Down velocity | Left/Right gravity");
        });

    actions
}
