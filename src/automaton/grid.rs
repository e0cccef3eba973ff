//! Grid dimensions, toroidal indexing and neighbor counting.

use crate::error::ConfigError;

/// Validated grid dimensions. Both axes are non-zero and `width * height`
/// fits in a `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        Ok(GridSize { width, height })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in a buffer of this size.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of an in-range coordinate.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Row-major index of any coordinate, wrapped onto the torus.
    #[inline]
    pub fn wrapped_index(&self, x: i64, y: i64) -> usize {
        let wx = x.rem_euclid(self.width as i64) as usize;
        let wy = y.rem_euclid(self.height as i64) as usize;
        self.index_of(wx, wy)
    }

    /// Grid position of a buffer index, `(i mod width, i div width)`.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as u64) < self.width as u64 && y >= 0 && (y as u64) < self.height as u64
    }

    /// Check that a buffer holds exactly one value per cell.
    pub fn check_buffer(&self, role: &'static str, len: usize) -> Result<(), ConfigError> {
        if len != self.cell_count() {
            return Err(ConfigError::BufferSize {
                role,
                expected: self.cell_count(),
                actual: len,
            });
        }
        Ok(())
    }
}

/// Count live cells in the 8-cell Moore neighborhood of `(x, y)`, wrapping
/// across the grid edges. Any nonzero value counts as alive.
///
/// On axes shorter than 3 the same cell is reached through several offsets
/// and is counted once per offset.
pub fn count_neighbors(cells: &[u8], size: GridSize, x: usize, y: usize) -> u8 {
    let w = size.width();
    let h = size.height();

    // x - 1 computed as x + w - 1 so the left edge wraps without signed math.
    let cols = [(x + w - 1) % w, x, (x + 1) % w];
    let rows = [(y + h - 1) % h, y, (y + 1) % h];

    let mut count = 0;
    for (dy, &ny) in rows.iter().enumerate() {
        let row = ny * w;
        for (dx, &nx) in cols.iter().enumerate() {
            if dx == 1 && dy == 1 {
                continue;
            }
            if cells[row + nx] != 0 {
                count += 1;
            }
        }
    }

    count
}
