//! Simulation state: grid, ping-pong buffers and the generation counter.

use log::{debug, error, info, warn};

use crate::automaton::{step_sized, BufferPair, ExecutionMode, GridSize, Seed};
use crate::config::LifeConfig;
use crate::error::ConfigError;

/// A running Game of Life simulation on a torus.
pub struct State {
    size: GridSize,
    buffers: BufferPair,
    generation: u64,
    mode: ExecutionMode,
    /// Dedicated pool for parallel stepping, or None to use the global pool.
    thread_pool: Option<rayon::ThreadPool>,
}

impl State {
    /// Create an all-dead, sequentially stepped grid.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let size = GridSize::new(width, height)?;
        info!("created {}x{} grid", width, height);
        Ok(State {
            size,
            buffers: BufferPair::new(size),
            generation: 0,
            mode: ExecutionMode::Sequential,
            thread_pool: None,
        })
    }

    /// Create a grid whose generation 0 is `cells`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, ConfigError> {
        let size = GridSize::new(width, height)?;
        let buffers = BufferPair::from_cells(size, cells)?;
        Ok(State {
            size,
            buffers,
            generation: 0,
            mode: ExecutionMode::Sequential,
            thread_pool: None,
        })
    }

    /// Create and seed a grid from validated configuration.
    ///
    /// `threads > 0` steps in parallel on a dedicated rayon pool. If the pool
    /// cannot be built, stepping falls back to sequential.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = State::new(config.width, config.height)?;
        if config.threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()
            {
                Ok(pool) => {
                    state.thread_pool = Some(pool);
                    state.mode = ExecutionMode::Parallel;
                }
                Err(e) => warn!(
                    "could not build {}-thread pool, stepping sequentially: {}",
                    config.threads, e
                ),
            }
        }

        state.seed(config.seed.to_seed())?;
        Ok(state)
    }

    /// Switch execution mode. Parallel without a dedicated pool runs on
    /// rayon's global pool.
    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation, row-major, one 0/1 value per cell.
    pub fn cells(&self) -> &[u8] {
        self.buffers.current()
    }

    pub fn live_count(&self) -> usize {
        self.cells().iter().filter(|&&c| c != 0).count()
    }

    /// Read a cell. Out-of-bounds coordinates read as dead.
    pub fn get_cell(&self, x: i64, y: i64) -> u8 {
        if !self.size.in_bounds(x, y) {
            return 0;
        }
        self.cells()[self.size.index_of(x as usize, y as usize)]
    }

    /// Set a cell in the current generation. Out-of-bounds coordinates are
    /// silently ignored.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        if !self.size.in_bounds(x, y) {
            return;
        }
        let idx = self.size.index_of(x as usize, y as usize);
        self.buffers.current_mut()[idx] = alive as u8;
    }

    /// Mutable view of the current generation for region import.
    pub fn cells_mut(&mut self) -> &mut [u8] {
        self.buffers.current_mut()
    }

    /// Repopulate the current generation and reset the counter to 0.
    pub fn seed(&mut self, seed: Seed) -> Result<(), ConfigError> {
        seed.fill(self.buffers.current_mut(), self.size)?;
        self.generation = 0;
        info!(
            "seeded {}x{} grid with {:?}: {} live cells",
            self.size.width(),
            self.size.height(),
            seed,
            self.live_count()
        );
        Ok(())
    }

    /// Advance one generation: step current into next, then swap roles.
    pub fn advance(&mut self) {
        let size = self.size;
        let mode = self.mode;
        let (source, destination) = self.buffers.split();

        // Both buffers are allocated at `size.cell_count()` and never resized.
        let result = match &self.thread_pool {
            Some(pool) => pool.install(|| step_sized(source, destination, size, mode)),
            None => step_sized(source, destination, size, mode),
        };
        if let Err(e) = result {
            error!("generation {} not stepped: {}", self.generation, e);
            return;
        }

        self.buffers.swap();
        self.generation = self.generation.wrapping_add(1);
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.live_count()
        );
    }

    /// Advance `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }
}
