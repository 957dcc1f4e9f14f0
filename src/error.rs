use thiserror::Error;

/// Startup configuration that cannot drive a simulation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid {axis} must be at least 1 cell")]
    ZeroDimension { axis: &'static str },
    #[error("update rate must be a positive number of generations per second, got {0}")]
    InvalidRate(f32),
    #[error("alive odds must be 1-in-N with N > 0")]
    ZeroOdds,
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error("window of {width_px}x{height_px} pixels is too large")]
    WindowTooLarge { width_px: u64, height_px: u64 },
}
