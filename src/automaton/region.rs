//! Region extraction and import operations.

use super::grid::GridSize;

/// Clamp a half-open rectangle to the grid. Returns `None` if it is empty.
fn clamp_region(
    size: GridSize,
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> Option<(usize, usize, usize, usize)> {
    let w = size.width() as i64;
    let h = size.height() as i64;

    let min_x = min_x.clamp(0, w);
    let min_y = min_y.clamp(0, h);
    let max_x = max_x.clamp(0, w);
    let max_y = max_y.clamp(0, h);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    Some((
        min_x as usize,
        min_y as usize,
        max_x as usize,
        max_y as usize,
    ))
}

/// Copy a rectangular region of `cells` into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest),
/// the same order `import_region` reads.
///
/// # Returns
/// Number of cells written, or 0 if the clamped region is empty or `out_buf`
/// is too small.
pub fn extract_region(
    cells: &[u8],
    size: GridSize,
    out_buf: &mut [u8],
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> usize {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(size, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let span = max_x - min_x;
    let total = span * (max_y - min_y);
    if out_buf.len() < total {
        return 0;
    }

    for (row, y) in (min_y..max_y).enumerate() {
        let src = size.index_of(min_x, y);
        out_buf[row * span..(row + 1) * span].copy_from_slice(&cells[src..src + span]);
    }

    total
}

/// Write a flat buffer into a rectangular region of `cells`.
///
/// Input values are normalized: 0 = dead, any non-zero = alive.
///
/// # Returns
/// Number of cells read, or 0 if the clamped region is empty or `in_buf`
/// is too short.
pub fn import_region(
    cells: &mut [u8],
    size: GridSize,
    in_buf: &[u8],
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> usize {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(size, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let span = max_x - min_x;
    let total = span * (max_y - min_y);
    if in_buf.len() < total {
        return 0;
    }

    for (row, y) in (min_y..max_y).enumerate() {
        let dst = size.index_of(min_x, y);
        let input = &in_buf[row * span..(row + 1) * span];
        for (cell, &value) in cells[dst..dst + span].iter_mut().zip(input) {
            *cell = (value != 0) as u8;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_region_basic() {
        let size = GridSize::new(8, 8).unwrap();
        let mut cells = vec![0u8; 64];
        cells[size.index_of(2, 2)] = 1;
        cells[size.index_of(3, 2)] = 1;
        cells[size.index_of(2, 3)] = 1;

        let mut buffer = vec![0u8; 16];
        let written = extract_region(&cells, size, &mut buffer, 2, 2, 6, 6);

        assert_eq!(written, 16);
        assert_eq!(buffer[0], 1); // (2,2)
        assert_eq!(buffer[1], 1); // (3,2)
        assert_eq!(buffer[4], 1); // (2,3)
        assert_eq!(buffer.iter().filter(|&&c| c == 1).count(), 3);
    }

    #[test]
    fn test_extract_region_out_of_bounds_is_clamped() {
        let size = GridSize::new(4, 4).unwrap();
        let cells = vec![1u8; 16];

        let mut buffer = vec![0u8; 100];
        let written = extract_region(&cells, size, &mut buffer, -2, -2, 10, 10);

        assert_eq!(written, 16);
        assert!(buffer[..16].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_extract_region_empty_or_short_buffer() {
        let size = GridSize::new(4, 4).unwrap();
        let cells = vec![1u8; 16];
        let mut buffer = vec![0u8; 16];

        assert_eq!(extract_region(&cells, size, &mut buffer, 3, 3, 1, 1), 0);
        assert_eq!(extract_region(&cells, size, &mut buffer, 5, 0, 9, 4), 0);
        assert_eq!(extract_region(&cells, size, &mut buffer[..3], 0, 0, 2, 2), 0);
    }

    #[test]
    fn test_import_region_normalization() {
        let size = GridSize::new(4, 4).unwrap();
        let mut cells = vec![0u8; 16];

        let buffer = [0, 1, 5, 255, 128, 2, 0, 1];
        let read = import_region(&mut cells, size, &buffer, 0, 0, 4, 2);

        assert_eq!(read, 8);
        assert_eq!(&cells[..8], &[0, 1, 1, 1, 1, 1, 0, 1]);
        assert!(cells[8..].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_extract_import_symmetry() {
        let size = GridSize::new(8, 8).unwrap();
        let mut source = vec![0u8; 64];
        source[size.index_of(2, 2)] = 1;
        source[size.index_of(3, 3)] = 1;

        let mut scratch = vec![0u8; 16];
        extract_region(&source, size, &mut scratch, 0, 0, 4, 4);

        let mut target = vec![0u8; 64];
        import_region(&mut target, size, &scratch, 0, 0, 4, 4);

        assert_eq!(target, source);
    }
}
