/// The transition a cell took into its current generation.
/// Only used to pick a color; liveness lives in `Cell::alive`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    BornAlive,
    StillAlive,
    BornDead,
    #[default]
    StillDead,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::BornAlive,
        CellState::StillAlive,
        CellState::BornDead,
        CellState::StillDead,
    ];

    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::BornAlive | CellState::StillAlive)
    }
}

/// Cell is the fundamental unit of the grid: liveness plus the
/// age classification used by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub state: CellState,
}

impl Cell {
    pub const BORN_ALIVE: Cell = Cell { alive: true, state: CellState::BornAlive };
    pub const STILL_ALIVE: Cell = Cell { alive: true, state: CellState::StillAlive };
    pub const BORN_DEAD: Cell = Cell { alive: false, state: CellState::BornDead };
    pub const STILL_DEAD: Cell = Cell { alive: false, state: CellState::StillDead };

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Game of Life (B3/S23), classified by the transition taken:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Live cell with any other count dies
    /// 3. Dead cell with exactly 3 neighbors is born
    /// 4. Dead cell with any other count stays dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        debug_assert!(neighbors <= 8);
        match (self.alive, neighbors) {
            (true, 2 | 3) => Cell::STILL_ALIVE,
            (true, _) => Cell::BORN_DEAD,
            (false, 3) => Cell::BORN_ALIVE,
            (false, _) => Cell::STILL_DEAD,
        }
    }
}
