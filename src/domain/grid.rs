use std::ops::Index;

use super::Cell;

/// Grid is a fixed-size toroidal array of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero, got {width}x{height}");
        Self {
            width,
            height,
            cells: vec![Cell::STILL_DEAD; width * height],
        }
    }

    /// Create a dead grid with the given coordinates set to `BornAlive`
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::BORN_ALIVE);
        }
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// The 8 toroidal neighbor coordinates of `(x, y)`, row by row
    /// starting at the top-left.
    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        debug_assert!(x < self.width && y < self.height);
        let (w, h) = (self.width, self.height);
        let left = (x + w - 1) % w;
        let right = (x + 1) % w;
        let above = (y + h - 1) % h;
        let below = (y + 1) % h;

        [
            (left, above), (x, above), (right, above),
            (left, y),                 (right, y),
            (left, below), (x, below), (right, below),
        ]
    }

    /// Count live neighbors using toroidal wrapping (always 0..=8)
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .into_iter()
            .filter(|&(nx, ny)| self[(nx, ny)].is_alive())
            .count() as u8
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Mutable access to every cell with its position, row by row
    pub fn iter_cells_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(idx, cell)| (idx % width, idx / width, cell))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(x < self.width && y < self.height, "({x}, {y}) is outside {}x{}", self.width, self.height);
        &self.cells[self.get_index(x, y)]
    }
}
