use clap::Parser;
use macroquad::prelude::Conf;

use crate::domain::AliveOdds;
use crate::error::ConfigError;

pub const DEFAULT_GRID_WIDTH: usize = 50;
pub const DEFAULT_GRID_HEIGHT: usize = 50;
pub const DEFAULT_RATE: f32 = 5.0;
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Pixel size of the window needed to show the whole grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width_px: u32,
    pub height_px: u32,
}

/// Startup configuration, read from the command line
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "conway_ages", version, about = "Conway's Game of Life, colored by cell age")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Generations per second
    #[arg(long, default_value_t = DEFAULT_RATE)]
    pub rate: f32,

    /// A fresh cell starts alive with probability 1/N
    #[arg(long, default_value_t = AliveOdds::DEFAULT.denominator())]
    pub alive_one_in: u32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Seed for the initial pattern; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            rate: DEFAULT_RATE,
            alive_one_in: AliveOdds::DEFAULT.denominator(),
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { axis: "height" });
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ConfigError::InvalidRate(self.rate));
        }
        if self.alive_one_in == 0 {
            return Err(ConfigError::ZeroOdds);
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let width_px = self.width as u64 * u64::from(self.cell_size);
        let height_px = self.height as u64 * u64::from(self.cell_size);
        if width_px > i32::MAX as u64 || height_px > i32::MAX as u64 {
            return Err(ConfigError::WindowTooLarge { width_px, height_px });
        }
        Ok(())
    }

    pub fn odds(&self) -> AliveOdds {
        AliveOdds::one_in(self.alive_one_in)
    }

    /// Grid dimensions times the cell size. Assumes `validate` passed.
    pub fn window_size(&self) -> WindowSize {
        WindowSize {
            width_px: self.width as u32 * self.cell_size,
            height_px: self.height as u32 * self.cell_size,
        }
    }

    pub fn window_conf(&self) -> Conf {
        let size = self.window_size();
        Conf {
            window_title: "Conway's Game of Life".to_owned(),
            window_width: size.width_px as i32,
            window_height: size.height_px as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}
