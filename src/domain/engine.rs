//! Generation engine: computes generation `g+1` from a frozen snapshot
//! of generation `g`.
//!
//! `current` is only ever read and `next` is only ever written, so no
//! write made during a pass can leak into a neighbor count of the same
//! pass. The borrow checker rules out passing one grid as both.

use super::Grid;

/// Write the generation following `current` into `next`.
///
/// Every cell of `next` is overwritten. Panics if the two grids differ
/// in size.
pub fn advance(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.dimensions(),
        next.dimensions(),
        "current and next buffers must have the same dimensions"
    );

    for (x, y, cell) in next.iter_cells_mut() {
        let neighbors = current.live_neighbors(x, y);
        *cell = current[(x, y)].evolve(neighbors);
    }
}
