mod cell;
mod grid;
mod engine;
mod initializer;

pub use cell::{Cell, CellState};
pub use grid::Grid;
pub use engine::advance;
pub use initializer::{AliveOdds, initialize};
