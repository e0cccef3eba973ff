//! Region extraction and import FFI functions.

use crate::automaton;
use crate::state::State;

/// Number of cells a region request may touch, before clamping.
fn requested_len(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> usize {
    let width = (max_x as i64 - min_x as i64).max(0) as usize;
    let height = (max_y as i64 - min_y as i64).max(0) as usize;
    width.saturating_mul(height)
}

/// Extracts a rectangular region of the current generation into a flat buffer.
///
/// # Layout
/// The buffer is filled in y,x order (y changes slowest, x changes fastest).
/// This matches the layout expected by `gol_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_extract_region(
    ptr: *const State,
    out_buf: *mut u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let len = requested_len(min_x, min_y, max_x, max_y);
    if len == 0 {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::extract_region(
        state.cells(),
        state.size(),
        buf_slice,
        min_x as i64,
        min_y as i64,
        max_x as i64,
        max_y as i64,
    ) as u64
}

/// Imports a rectangular region of cells from a flat buffer into the current
/// generation.
///
/// # Layout
/// The buffer is expected to be in y,x order (matching `gol_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `in_buf` must point to at least `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_import_region(
    ptr: *mut State,
    in_buf: *const u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    let len = requested_len(min_x, min_y, max_x, max_y);
    if len == 0 {
        return 0;
    }

    let size = state.size();
    let buf_slice = std::slice::from_raw_parts(in_buf, len);
    automaton::import_region(
        state.cells_mut(),
        size,
        buf_slice,
        min_x as i64,
        min_y as i64,
        max_x as i64,
        max_y as i64,
    ) as u64
}
