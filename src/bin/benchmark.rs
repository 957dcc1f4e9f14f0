//! Generation throughput benchmark for the double-buffered engine

use std::time::Instant;
use conway_ages::{AliveOdds, Grid, advance, initialize};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_advance(width: usize, height: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(0);
    let mut current = Grid::new(width, height);
    let mut next = Grid::new(width, height);
    initialize(&mut current, &mut rng, AliveOdds::DEFAULT);

    let start = Instant::now();
    for _ in 0..iterations {
        advance(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_clone_per_step(width: usize, height: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(0);
    let mut live = Grid::new(width, height);
    initialize(&mut live, &mut rng, AliveOdds::DEFAULT);

    let start = Instant::now();
    for _ in 0..iterations {
        let snapshot = live.clone();
        advance(&snapshot, &mut live);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 50;

    println!("{:>10} {:>12} {:>12} {:>16}", "Size", "Swap ms", "Clone ms", "Cells/sec");
    println!("{:-<54}", "");

    for size in sizes {
        let swap_ms = benchmark_advance(size, size, iterations);
        let clone_ms = benchmark_clone_per_step(size, size, iterations);
        let cells_per_sec = (size * size) as f64 / (swap_ms / 1000.0);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>15.1}M",
            format!("{}x{}", size, size),
            swap_ms,
            clone_ms,
            cells_per_sec / 1_000_000.0
        );
    }
}
