//! State creation, destruction, and dimension/generation queries.

use std::ptr;

use log::warn;

use crate::state::State;

/// Creates an all-dead `width x height` grid and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new State, or null if either dimension is zero.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(width: u32, height: u32) -> *mut State {
    match State::new(width as usize, height as usize) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(e) => {
            warn!("gol_create rejected: {}", e);
            ptr::null_mut()
        }
    }
}

/// Destroys a state and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn gol_width(ptr: *const State) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).size().width() as u32
}

/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
#[no_mangle]
pub unsafe extern "C" fn gol_height(ptr: *const State) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).size().height() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let state = gol_create(64, 32);
            assert!(!state.is_null());
            assert_eq!(gol_width(state), 64);
            assert_eq!(gol_height(state), 32);
            assert_eq!(gol_get_generation(state), 0);

            gol_destroy(state);
        }
    }

    #[test]
    fn test_create_invalid_returns_null() {
        assert!(gol_create(0, 8).is_null());
        assert!(gol_create(8, 0).is_null());
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            gol_destroy(ptr::null_mut());
            assert_eq!(gol_get_generation(ptr::null()), 0);
            assert_eq!(gol_width(ptr::null()), 0);
            assert_eq!(gol_height(ptr::null()), 0);
        }
    }
}
