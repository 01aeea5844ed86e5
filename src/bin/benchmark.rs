//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use canvas_life::{Algorithm, Grid};
use rand::{SeedableRng, rngs::StdRng};

const CELL_SIZE: u32 = 10;

fn benchmark(algorithm: Algorithm, surface: u32, iterations: u32) -> f64 {
    let mut grid = Grid::create(surface, surface, CELL_SIZE);
    grid.randomize(&mut StdRng::seed_from_u64(0x5eed));

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let surfaces = [400, 1000, 2000, 5000, 10000];
    let iterations = 20;

    println!(
        "{:>12} {:>10} {:>12} {:>12} {:>10}",
        "Surface", "Cells", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for surface in surfaces {
        let cells = (surface / CELL_SIZE + 1).pow(2);
        let serial_ms = benchmark(Algorithm::Serial, surface, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, surface, iterations);

        println!(
            "{:>12} {:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{surface}x{surface}"),
            cells,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
