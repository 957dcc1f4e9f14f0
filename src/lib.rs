// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Configuration and buffer coordination
pub mod application;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellState, Grid, AliveOdds, advance, initialize};
pub use application::{Config, Simulation, WindowSize};
pub use error::ConfigError;
