//! Core automaton logic.
//!
//! Grid indexing, the Conway transition, the ping-pong buffer pair, seeding
//! and region sync. `State` and the FFI layer in `ffi/` build on these.

pub mod buffers;
pub mod grid;
pub mod region;
pub mod seed;
pub mod stepping;

pub use buffers::BufferPair;
pub use grid::{count_neighbors, GridSize};
pub use region::{extract_region, import_region};
pub use seed::{Pattern, Seed, DEFAULT_DENSITY};
pub use stepping::{next_state, step, step_parallel, step_sized, ExecutionMode};
