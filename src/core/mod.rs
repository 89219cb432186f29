pub mod ballistics;
pub mod chart;
pub mod sweep;
pub mod window;

pub use ballistics::{DomainError, PhysicalConstants};
pub use chart::ChartSpec;
pub use sweep::{AngleDomain, RangeSweep};
pub use window::AxisWindow;

/// Installs the fmt subscriber shared by both binaries. `RUST_LOG` wins over
/// the default `parabolic_range=info` directive.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("parabolic_range=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
