//! Cell access, seeding, stepping and the read-only view for renderers.

use std::ptr;

use log::warn;

use crate::automaton::Seed;
use crate::state::State;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut State, x: i32, y: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_cell(x as i64, y as i64, alive != 0);
}

/// Gets the state of a cell in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const State, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).get_cell(x as i64, y as i64)
}

/// Advances the automaton by one generation and swaps the current buffer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn gol_step(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }
    (*ptr).advance();
}

/// Returns a read-only pointer to the current generation's cells.
///
/// Cell `i` is at `(i % width, i / width)`; each byte is 0 or 1. The pointer
/// stays valid until the next `gol_step`, `gol_seed_random`, `gol_clear` or
/// `gol_destroy` on the same handle.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_len` must be a valid pointer to a `usize`, or null
///
/// # Returns
/// The cell pointer, or null if `ptr` is null. `*out_len` receives the
/// number of cells (0 on null `ptr`).
#[no_mangle]
pub unsafe extern "C" fn gol_current_cells(ptr: *const State, out_len: *mut usize) -> *const u8 {
    if ptr.is_null() {
        if !out_len.is_null() {
            *out_len = 0;
        }
        return ptr::null();
    }

    let cells = (*ptr).cells();
    if !out_len.is_null() {
        *out_len = cells.len();
    }
    cells.as_ptr()
}

/// Repopulates the grid at random and resets the generation to 0.
///
/// `rng_seed == 0` draws from the thread RNG; any other value gives a
/// reproducible pattern.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or density outside [0, 1]).
#[no_mangle]
pub unsafe extern "C" fn gol_seed_random(ptr: *mut State, density: f64, rng_seed: u64) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let seed = Seed::Random {
        density,
        rng_seed: (rng_seed != 0).then_some(rng_seed),
    };
    match (*ptr).seed(seed) {
        Ok(()) => 0,
        Err(e) => {
            warn!("gol_seed_random rejected: {}", e);
            1
        }
    }
}

/// Kills every cell and resets the generation to 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn gol_clear(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }
    // Clearing cannot fail validation
    let _ = (*ptr).seed(Seed::Clear);
}
