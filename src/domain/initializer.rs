use rand::Rng;

use super::{Cell, Grid};

/// Chance that a freshly seeded cell starts alive, as 1-in-N
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AliveOdds {
    one_in: u32,
}

impl AliveOdds {
    pub const DEFAULT: AliveOdds = AliveOdds { one_in: 6 };

    /// Panics if `n` is zero.
    pub fn one_in(n: u32) -> Self {
        assert!(n > 0, "alive odds must be 1-in-N with N > 0");
        Self { one_in: n }
    }

    pub const fn denominator(self) -> u32 {
        self.one_in
    }

    pub fn probability(self) -> f64 {
        1.0 / f64::from(self.one_in)
    }
}

impl Default for AliveOdds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Overwrite every cell with an independent random draw.
/// Alive cells start as `BornAlive`, dead ones as `BornDead`.
pub fn initialize<R: Rng>(grid: &mut Grid, rng: &mut R, odds: AliveOdds) {
    grid.iter_cells_mut().for_each(|(_, _, cell)| {
        *cell = if rng.random_range(0..odds.one_in) == 0 {
            Cell::BORN_ALIVE
        } else {
            Cell::BORN_DEAD
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_alive_fraction_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(300, 300);
        initialize(&mut grid, &mut rng, AliveOdds::DEFAULT);

        let fraction = grid.population() as f64 / (300.0 * 300.0);
        assert!((fraction - 1.0 / 6.0).abs() < 0.01, "alive fraction {fraction}");
    }

    #[test]
    fn test_initial_states_match_liveness() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(50, 50);
        initialize(&mut grid, &mut rng, AliveOdds::DEFAULT);

        for (_, _, cell) in grid.iter_cells() {
            let expected = if cell.alive { CellState::BornAlive } else { CellState::BornDead };
            assert_eq!(cell.state, expected);
        }
    }

    #[test]
    fn test_overwrites_prior_content() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = Grid::new(20, 20);
        grid.iter_cells_mut().for_each(|(_, _, cell)| *cell = Cell::STILL_ALIVE);

        initialize(&mut grid, &mut rng, AliveOdds::DEFAULT);
        assert!(grid.iter_cells().all(|(_, _, cell)| {
            matches!(cell.state, CellState::BornAlive | CellState::BornDead)
        }));
    }

    #[test]
    fn test_one_in_one_fills_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10, 10);
        initialize(&mut grid, &mut rng, AliveOdds::one_in(1));
        assert_eq!(grid.population(), 100);
    }

    #[test]
    fn test_default_odds_are_one_in_six() {
        assert_eq!(AliveOdds::default().denominator(), 6);
        assert!((AliveOdds::default().probability() - 1.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic]
    fn test_zero_odds_panic() {
        AliveOdds::one_in(0);
    }
}
