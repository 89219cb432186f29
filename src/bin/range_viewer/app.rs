use macroquad::prelude::*;
use tracing::info;

use crate::constants::{
    BACKGROUND, CURVE_COLOR, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MSAA_SAMPLES,
};
use crate::controls::{apply_keyboard_adjustments, draw_control_panel, hotkey_actions};
use crate::render::{
    PlotRect, draw_axes, draw_axis_tick_labels, draw_curve, draw_grid, draw_peak, draw_title,
};
use crate::state::ViewerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Range vs. Launch Angle".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = ViewerState::new();
    info!(
        speed_mps = state.speed_mps,
        gravity_mps2 = state.gravity_mps2,
        "range viewer started"
    );

    loop {
        let frame_dt = get_frame_time();
        let rect = PlotRect::from_screen(screen_width(), screen_height());

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        if actions.reset {
            state.reset();
        }
        apply_keyboard_adjustments(&mut state, frame_dt);
        state.refresh();

        clear_background(BACKGROUND);
        if state.spec.grid {
            draw_grid(rect, GRID_COLOR);
        }
        draw_axes(rect, &state.window);
        draw_axis_tick_labels(rect, &state.window, &state.spec);
        draw_title(&state.spec, rect);
        draw_curve(state.sweep.points(), rect, &state.window, 3.0, CURVE_COLOR);
        draw_peak(state.sweep.peak(), rect, &state.window);

        next_frame().await;
    }
}
