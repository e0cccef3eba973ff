//! Cellular automaton stepping with Conway B3/S23 rules on a torus.

use rayon::prelude::*;

use super::grid::{count_neighbors, GridSize};
use crate::error::ConfigError;

/// How a generation is dispatched across cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded row-major loop.
    #[default]
    Sequential,
    /// Row-parallel pass on the current rayon pool.
    Parallel,
}

/// Conway transition for one cell.
///
/// - 2 neighbors: keep the current state
/// - 3 neighbors: alive
/// - anything else: dead
#[inline]
pub fn next_state(current: u8, neighbors: u8) -> u8 {
    match neighbors {
        2 => (current != 0) as u8,
        3 => 1,
        _ => 0,
    }
}

/// Step one generation from `source` into `destination`.
///
/// `destination` is fully overwritten; its prior contents are ignored.
/// Dimensions and buffer lengths are checked before any cell is written.
pub fn step(
    source: &[u8],
    destination: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConfigError> {
    let size = GridSize::new(width, height)?;
    step_sized(source, destination, size, ExecutionMode::Sequential)
}

/// Same as [`step`], but dispatches rows across the rayon pool.
pub fn step_parallel(
    source: &[u8],
    destination: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConfigError> {
    let size = GridSize::new(width, height)?;
    step_sized(source, destination, size, ExecutionMode::Parallel)
}

/// Step with an already validated grid size.
pub fn step_sized(
    source: &[u8],
    destination: &mut [u8],
    size: GridSize,
    mode: ExecutionMode,
) -> Result<(), ConfigError> {
    size.check_buffer("source", source.len())?;
    size.check_buffer("destination", destination.len())?;

    match mode {
        ExecutionMode::Sequential => step_rows_sequential(source, destination, size),
        ExecutionMode::Parallel => step_rows_parallel(source, destination, size),
    }
    Ok(())
}

fn step_row(source: &[u8], row: &mut [u8], size: GridSize, y: usize) {
    let base = y * size.width();
    for (x, out) in row.iter_mut().enumerate() {
        let neighbors = count_neighbors(source, size, x, y);
        *out = next_state(source[base + x], neighbors);
    }
}

fn step_rows_sequential(source: &[u8], destination: &mut [u8], size: GridSize) {
    for (y, row) in destination.chunks_mut(size.width()).enumerate() {
        step_row(source, row, size, y);
    }
}

fn step_rows_parallel(source: &[u8], destination: &mut [u8], size: GridSize) {
    destination
        .par_chunks_mut(size.width())
        .enumerate()
        .for_each(|(y, row)| step_row(source, row, size, y));
}
