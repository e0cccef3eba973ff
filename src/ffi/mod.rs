//! C FFI layer for non-Rust hosts.
//!
//! This module exports C ABI functions for a host (a browser/JS shim, LuaJIT,
//! a C render loop) that owns scheduling and drawing.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust conversions.
//! None of them panic across the boundary.

pub mod grid;
pub mod lifecycle;
pub mod region;

pub use grid::{
    gol_clear, gol_current_cells, gol_get_cell, gol_seed_random, gol_set_cell, gol_step,
};
pub use lifecycle::{gol_create, gol_destroy, gol_get_generation, gol_height, gol_width};
pub use region::{gol_extract_region, gol_import_region};
