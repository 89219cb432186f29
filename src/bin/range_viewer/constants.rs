use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 42.0;
pub const X_GRID_LINES: usize = 9;
pub const Y_GRID_LINES: usize = 8;

pub const MIN_PLOT_WIDTH: f32 = 240.0;
pub const MIN_PLOT_HEIGHT: f32 = 160.0;

pub const SPEED_RANGE_MPS: (f64, f64) = (0.0, 100.0);
pub const GRAVITY_RANGE_MPS2: (f64, f64) = (0.5, 30.0);
/// Control values are kept to hundredths.
pub const INPUT_STEPS_PER_UNIT: f64 = 100.0;
pub const SPEED_KEY_RATE_MPS: f64 = 15.0;
pub const GRAVITY_KEY_RATE_MPS2: f64 = 4.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const CURVE_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
