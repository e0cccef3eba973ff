//! Torus Automata - double-buffered Game of Life on a toroidal grid
//!
//! The core is a pure transition `source -> destination` (`automaton::step`)
//! and a ping-pong buffer pair whose roles swap after every generation
//! (`State::advance`). Around it sit a fixed-interval scheduler, a render
//! trait, seeding, TOML configuration and a C ABI for non-Rust hosts.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod render;
pub mod scheduler;
pub mod state;

pub use automaton::{step, step_parallel, ExecutionMode, GridSize, Pattern, Seed};
pub use config::{LifeConfig, LoadError};
pub use error::ConfigError;
pub use render::{Frame, Renderer, TextRenderer};
pub use scheduler::{Scheduler, Ticker};
pub use state::State;

#[cfg(test)]
mod tests;
