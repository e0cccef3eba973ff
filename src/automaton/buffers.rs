//! Ping-pong buffer pair.
//!
//! Two equally sized cell buffers, A and B, plus a flag naming the current
//! one. A generation reads the current buffer and writes the other; the flag
//! flips only after the write pass has finished.

use super::grid::GridSize;
use crate::error::ConfigError;

pub struct BufferPair {
    a: Vec<u8>,
    b: Vec<u8>,
    current_is_a: bool,
}

impl BufferPair {
    /// Allocate an all-dead pair with A current.
    pub fn new(size: GridSize) -> Self {
        BufferPair {
            a: vec![0; size.cell_count()],
            b: vec![0; size.cell_count()],
            current_is_a: true,
        }
    }

    /// Build a pair whose current buffer is `seed`, normalized to 0/1.
    pub fn from_cells(size: GridSize, seed: Vec<u8>) -> Result<Self, ConfigError> {
        size.check_buffer("seed", seed.len())?;
        let mut a = seed;
        for cell in &mut a {
            *cell = (*cell != 0) as u8;
        }
        Ok(BufferPair {
            a,
            b: vec![0; size.cell_count()],
            current_is_a: true,
        })
    }

    /// The readable, displayable generation.
    pub fn current(&self) -> &[u8] {
        if self.current_is_a {
            &self.a
        } else {
            &self.b
        }
    }

    /// Mutable access to the current generation, for seeding and edits
    /// between steps.
    pub fn current_mut(&mut self) -> &mut [u8] {
        if self.current_is_a {
            &mut self.a
        } else {
            &mut self.b
        }
    }

    /// Borrow `(source, destination)` for one generation. The two slices are
    /// always distinct allocations.
    pub fn split(&mut self) -> (&[u8], &mut [u8]) {
        if self.current_is_a {
            (&self.a, &mut self.b)
        } else {
            (&self.b, &mut self.a)
        }
    }

    /// Hand the destination over as the new current buffer.
    pub fn swap(&mut self) {
        self.current_is_a = !self.current_is_a;
    }

    pub fn current_is_a(&self) -> bool {
        self.current_is_a
    }
}
