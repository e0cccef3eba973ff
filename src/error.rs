//! Error types.

/// Invalid configuration, raised before any generation runs.
///
/// Once a step starts with a validated grid and correctly sized buffers it
/// cannot fail, so this is the only error the stepper produces.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid {width}x{height} is too large to address")]
    GridTooLarge { width: usize, height: usize },

    #[error("{role} buffer holds {actual} cells, expected {expected}")]
    BufferSize {
        role: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("seed density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("tick interval must be non-zero")]
    ZeroInterval,
}
