//! Terminal demo: runs the fixed-interval scheduler against the text renderer.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use torus_automata::{LifeConfig, Pattern, Scheduler, State, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "life", about = "Conway's Game of Life on a torus")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between generations
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Worker threads for parallel stepping (0 = sequential)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Initial live-cell probability for a random seed
    #[arg(long)]
    density: Option<f64>,

    /// Fixed RNG seed for a reproducible start
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Start from a pattern: glider, blinker, block, toad, beacon
    #[arg(short, long)]
    pattern: Option<Pattern>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<u64>,

    /// Do not clear the terminal between frames
    #[arg(long)]
    no_clear: bool,
}

impl Args {
    fn into_config(self) -> Result<(LifeConfig, Option<u64>, bool)> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => LifeConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(interval) = self.interval_ms {
            config.tick_interval_ms = interval;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(density) = self.density {
            config.seed.density = density;
        }
        if self.rng_seed.is_some() {
            config.seed.rng_seed = self.rng_seed;
        }
        if self.pattern.is_some() {
            config.seed.pattern = self.pattern;
        }

        config.validate().context("invalid configuration")?;
        Ok((config, self.generations, !self.no_clear))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, generations, clear) = Args::parse().into_config()?;
    info!(
        "running {}x{} every {} ms",
        config.width, config.height, config.tick_interval_ms
    );

    let mut state = State::from_config(&config).context("building simulation")?;
    let scheduler = Scheduler::new(config.tick_interval()).context("building scheduler")?;
    let mut renderer = TextRenderer::new(io::stdout().lock()).with_clear_screen(clear);

    let ticks = scheduler
        .run(&mut state, &mut renderer, generations)
        .context("rendering to stdout")?;
    info!("stopped after {} generations", ticks);

    Ok(())
}
