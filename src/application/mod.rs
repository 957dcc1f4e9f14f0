mod config;
mod simulation;

pub use config::{Config, WindowSize};
pub use simulation::Simulation;
