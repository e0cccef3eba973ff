//! Initial population of the first generation.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::grid::GridSize;
use crate::error::ConfigError;

/// Fraction of live cells in a random seed.
pub const DEFAULT_DENSITY: f64 = 0.4;

/// Classic Game of Life patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Glider,
    Blinker,
    Block,
    Toad,
    Beacon,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::Toad,
        Pattern::Beacon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
        }
    }

    /// Live cells relative to the pattern's top-left corner.
    pub fn cells(&self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Pattern::Beacon => &[
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
        }
    }

    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (i64, i64) {
        self.cells().iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x + 1), h.max(y + 1))
        })
    }

    /// Stamp the pattern with its top-left corner at `(x, y)`, wrapping
    /// toroidally. Cells outside the pattern are left untouched.
    pub fn stamp(&self, cells: &mut [u8], size: GridSize, x: i64, y: i64) {
        for &(dx, dy) in self.cells() {
            cells[size.wrapped_index(x + dx, y + dy)] = 1;
        }
    }

    /// Stamp the pattern centered on the grid.
    pub fn stamp_centered(&self, cells: &mut [u8], size: GridSize) {
        let (w, h) = self.extent();
        let x = (size.width() as i64 - w) / 2;
        let y = (size.height() as i64 - h) / 2;
        self.stamp(cells, size, x, y);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown pattern '{s}'"))
    }
}

/// How to populate generation 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seed {
    /// Each cell alive with probability `density`. A fixed `rng_seed` makes
    /// the result reproducible.
    Random { density: f64, rng_seed: Option<u64> },
    /// A single pattern centered on an otherwise dead grid.
    Pattern(Pattern),
    /// All cells dead.
    Clear,
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random {
            density: DEFAULT_DENSITY,
            rng_seed: None,
        }
    }
}

impl Seed {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Seed::Random { density, .. } if !(0.0..=1.0).contains(&density) => {
                Err(ConfigError::InvalidDensity(density))
            }
            _ => Ok(()),
        }
    }

    /// Overwrite every cell of `cells` with this seed.
    pub fn fill(&self, cells: &mut [u8], size: GridSize) -> Result<(), ConfigError> {
        self.validate()?;
        size.check_buffer("seed", cells.len())?;

        match *self {
            Seed::Random { density, rng_seed } => match rng_seed {
                Some(seed) => fill_random(cells, density, &mut StdRng::seed_from_u64(seed)),
                None => fill_random(cells, density, &mut rand::rng()),
            },
            Seed::Pattern(pattern) => {
                cells.fill(0);
                pattern.stamp_centered(cells, size);
            }
            Seed::Clear => cells.fill(0),
        }
        Ok(())
    }
}

fn fill_random<R: Rng + ?Sized>(cells: &mut [u8], density: f64, rng: &mut R) {
    for cell in cells.iter_mut() {
        *cell = rng.random_bool(density) as u8;
    }
}
