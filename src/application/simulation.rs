use macroquad::logging::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::Config;
use crate::domain::{AliveOdds, Grid, advance, initialize};

/// Simulation orchestrates the two generation buffers.
/// `current` is what gets drawn; `next` is scratch space for `advance`.
pub struct Simulation {
    current: Grid,
    next: Grid,
    rng: StdRng,
    odds: AliveOdds,
    generation: u64,
    update_timer: f32,
    updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Create a randomly seeded simulation from a validated config
    pub fn new(config: &Config) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut sim = Self::from_grid(Grid::new(config.width, config.height), rng, config.odds())
            .with_rate(config.rate);
        initialize(&mut sim.current, &mut sim.rng, sim.odds);
        sim
    }

    /// Wrap an existing grid as generation 0
    pub fn from_grid(grid: Grid, rng: StdRng, odds: AliveOdds) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            current: grid,
            next: Grid::new(width, height),
            rng,
            odds,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 5.0,
            last_step_time_ms: 0.0,
        }
    }

    /// Set update rate (builder pattern)
    pub fn with_rate(mut self, updates_per_second: f32) -> Self {
        debug_assert!(updates_per_second > 0.0);
        self.updates_per_second = updates_per_second;
        self
    }

    /// The most recently computed generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn updates_per_second(&self) -> f32 {
        self.updates_per_second
    }

    /// Compute one generation, then swap so it becomes `current`
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        advance(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Reseed the live buffer and reset the generation counter
    pub fn restart(mut self) -> Self {
        initialize(&mut self.current, &mut self.rng, self.odds);
        info!(
            "restarted after {} generations, population {}",
            self.generation,
            self.current.population()
        );
        self.generation = 0;
        self.update_timer = 0.0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        debug!("speed set to {} gen/s", self.updates_per_second);
        self
    }

    /// Advance the frame clock; steps once the update interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self = self.step();
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, CellState};

    fn blinker_sim() -> Simulation {
        let grid = Grid::with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        Simulation::from_grid(grid, StdRng::seed_from_u64(0), AliveOdds::DEFAULT)
    }

    #[test]
    fn test_new_is_seeded_generation_zero() {
        let config = Config { width: 30, height: 20, seed: Some(5), ..Config::default() };
        let sim = Simulation::new(&config);

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().dimensions(), (30, 20));
        assert!(sim.grid().iter_cells().all(|(_, _, cell)| {
            matches!(cell.state, CellState::BornAlive | CellState::BornDead)
        }));
        assert_eq!(sim.updates_per_second(), 5.0);
    }

    #[test]
    fn test_same_seed_same_start() {
        let config = Config { seed: Some(77), ..Config::default() };
        assert_eq!(Simulation::new(&config).grid(), Simulation::new(&config).grid());
    }

    #[test]
    fn test_step_swaps_buffers() {
        let sim = blinker_sim().step();
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid()[(2, 1)], Cell::BORN_ALIVE);
        assert_eq!(sim.grid()[(1, 2)], Cell::BORN_DEAD);

        let sim = sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid()[(1, 2)], Cell::BORN_ALIVE);
        assert_eq!(sim.grid()[(2, 2)], Cell::STILL_ALIVE);
        assert_eq!(sim.grid()[(2, 1)], Cell::BORN_DEAD);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let sim = blinker_sim().with_rate(5.0);
        let sim = sim.tick(0.1);
        assert_eq!(sim.generation(), 0);
        let sim = sim.tick(0.15);
        assert_eq!(sim.generation(), 1);
        let sim = sim.tick(0.05);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_restart_reseeds_live_buffer() {
        let sim = blinker_sim().step().step().restart();
        assert_eq!(sim.generation(), 0);
        assert!(sim.grid().iter_cells().all(|(_, _, cell)| {
            matches!(cell.state, CellState::BornAlive | CellState::BornDead)
        }));

        let sim = sim.step();
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let sim = blinker_sim().adjust_speed(100.0);
        assert_eq!(sim.updates_per_second(), 60.0);
        let sim = sim.adjust_speed(-100.0);
        assert_eq!(sim.updates_per_second(), 1.0);
    }
}
