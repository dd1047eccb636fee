#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::time::Instant;

use log::{error, info};
use mlp::{logging, Digit, Matrix, MatrixError, Network, IMG_DIMS};
use rayon::prelude::*;

const DEFAULT_ITERATIONS: u64 = 256;
const DEFAULT_SEED: u64 = 42;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parse = |i: usize, default: u64| -> Option<u64> {
        match args.get(i) {
            Some(s) => s.parse().ok(),
            None => Some(default),
        }
    };
    let (Some(iterations), Some(seed)) = (parse(0, DEFAULT_ITERATIONS), parse(1, DEFAULT_SEED))
    else {
        eprintln!("Usage: mlp-bench [iterations] [seed]");
        return ExitCode::FAILURE;
    };

    match run(iterations, seed) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("sequential and parallel results differ");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(iterations: u64, seed: u64) -> Result<bool, MatrixError> {
    let network = Network::random(seed)?;
    let images = (0..iterations)
        .map(|i| Matrix::random(IMG_DIMS.rows, IMG_DIMS.cols, seed ^ (i + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    info!("classifying {iterations} images (seed {seed})");

    let start = Instant::now();
    let sequential = images
        .iter()
        .map(|image| network.classify_image(image))
        .collect::<Result<Vec<Digit>, _>>()?;
    let sequential_time = start.elapsed();

    // one image per task; each call owns its copy of the input
    let start = Instant::now();
    let parallel = images
        .par_iter()
        .map(|image| network.classify_image(image))
        .collect::<Result<Vec<Digit>, _>>()?;
    let parallel_time = start.elapsed();

    let per_image = sequential_time.as_secs_f64() * 1e6 / iterations.max(1) as f64;
    println!("sequential: {sequential_time:?} ({per_image:.1} us/image)");
    println!("parallel:   {parallel_time:?}");

    let mut histogram = [0usize; 10];
    for digit in &sequential {
        if let Some(count) = histogram.get_mut(digit.value) {
            *count += 1;
        }
    }
    println!("class histogram: {histogram:?}");

    Ok(sequential == parallel)
}
