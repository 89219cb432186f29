pub const X_LABEL: &str = "Launch Angle (degrees)";
pub const Y_LABEL: &str = "Range (meters)";

/// Labels and decorations handed to whichever renderer draws the sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl ChartSpec {
    pub fn for_speed(speed_mps: f64) -> Self {
        Self {
            title: format!(
                "Range of a Projectile vs. Launch Angle\nInitial Velocity: {speed_mps} m/s"
            ),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            grid: true,
        }
    }

    pub fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.title.lines()
    }
}
