use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;
use tracing::info;

use crate::core::chart::ChartSpec;
use crate::core::sweep::RangeSweep;
use crate::core::window::axis_window;

pub const DEFAULT_SIZE_PX: (u32, u32) = (1024, 768);

const TITLE_AREA_PX: i32 = 72;
const TITLE_LINE_PX: i32 = 28;
const CURVE_COLOR: RGBColor = RGBColor(54, 123, 245);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported chart format '{0}', expected .png or .svg")]
    UnsupportedFormat(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Writes the sweep to `path` as a line chart; the extension picks the format.
pub fn render_chart(
    path: &Path,
    sweep: &RangeSweep,
    spec: &ChartSpec,
    size_px: (u32, u32),
) -> Result<(), RenderError> {
    let format = ChartFormat::from_path(path)?;
    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size_px).into_drawing_area();
            draw_chart(root, sweep, spec).map_err(|e| RenderError::Draw(e.to_string()))?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size_px).into_drawing_area();
            draw_chart(root, sweep, spec).map_err(|e| RenderError::Draw(e.to_string()))?;
        }
    }

    info!(path = %path.display(), ?format, samples = sweep.angles().len(), "chart written");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    sweep: &RangeSweep,
    spec: &ChartSpec,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let (title_area, plot_area) = root.split_vertically(TITLE_AREA_PX);

    let (title_w, _) = title_area.dim_in_pixel();
    let title_style = ("sans-serif", 22)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in spec.title_lines().enumerate() {
        let y = 10 + (i as i32 * TITLE_LINE_PX);
        title_area.draw(&Text::new(
            line.to_string(),
            (title_w as i32 / 2, y),
            title_style.clone(),
        ))?;
    }

    let window = axis_window(sweep.angles(), sweep.ranges());
    let mut chart = ChartBuilder::on(&plot_area)
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str());
    if !spec.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(
        sweep.points(),
        CURVE_COLOR.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sweep::sweep;
    use crate::core::{AngleDomain, PhysicalConstants};
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("parabolic_range_{}_{name}", std::process::id()))
    }

    fn default_sweep() -> RangeSweep {
        sweep(&AngleDomain::default(), PhysicalConstants::default())
    }

    #[test]
    fn svg_chart_carries_title_and_axis_labels() {
        let path = scratch_path("labels.svg");
        let spec = ChartSpec::for_speed(20.0);
        render_chart(&path, &default_sweep(), &spec, (640, 480)).expect("svg should render");

        let svg = std::fs::read_to_string(&path).expect("chart file should exist");
        let _ = std::fs::remove_file(&path);
        assert!(svg.contains("Range of a Projectile vs. Launch Angle"));
        assert!(svg.contains("Initial Velocity: 20 m/s"));
        assert!(svg.contains("Launch Angle (degrees)"));
        assert!(svg.contains("Range (meters)"));
    }

    #[test]
    fn disabling_the_grid_draws_fewer_lines() {
        let with_grid = scratch_path("grid.svg");
        let without_grid = scratch_path("nogrid.svg");
        let mut spec = ChartSpec::for_speed(20.0);
        render_chart(&with_grid, &default_sweep(), &spec, (640, 480)).unwrap();
        spec.grid = false;
        render_chart(&without_grid, &default_sweep(), &spec, (640, 480)).unwrap();

        let count = |path: &PathBuf| {
            let svg = std::fs::read_to_string(path).unwrap();
            let _ = std::fs::remove_file(path);
            svg.matches("<line").count()
        };
        assert!(count(&with_grid) > count(&without_grid));
    }

    #[test]
    fn unwritable_destination_is_a_draw_error() {
        let path = scratch_path("missing_dir").join("range.svg");
        let err = render_chart(&path, &default_sweep(), &ChartSpec::for_speed(20.0), (320, 240))
            .unwrap_err();
        assert!(matches!(err, RenderError::Draw(_)), "{err}");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ChartFormat::from_path(Path::new("out/range.png")).unwrap(),
            ChartFormat::Png
        );
        assert_eq!(
            ChartFormat::from_path(Path::new("range.SVG")).unwrap(),
            ChartFormat::Svg
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["range.jpg", "range", "range.png.txt"] {
            let err = ChartFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, RenderError::UnsupportedFormat(_)), "{name}");
        }
    }
}
