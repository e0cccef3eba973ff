//! Fixed-interval driver for "advance one generation".
//!
//! Best effort, no backpressure: when a tick overruns by whole intervals the
//! missed ticks are dropped rather than replayed in a burst.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::{trace, warn};

use crate::error::ConfigError;
use crate::render::{Frame, Renderer};
use crate::state::State;

/// Result of polling a [`Ticker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// A tick is due now.
    pub due: bool,
    /// Whole intervals skipped since the previous due tick.
    pub dropped: u64,
}

/// Deadline bookkeeping for a fixed-interval trigger, independent of sleeping.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next_deadline: Instant,
    dropped_total: u64,
}

impl Ticker {
    /// First tick is due one interval after `start`.
    pub fn new(interval: Duration, start: Instant) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Ticker {
            interval,
            next_deadline: start + interval,
            dropped_total: 0,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn dropped_total(&self) -> u64 {
        self.dropped_total
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }

    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        if now < self.next_deadline {
            return TickOutcome {
                due: false,
                dropped: 0,
            };
        }

        let late = now.duration_since(self.next_deadline).as_nanos();
        let interval = self.interval.as_nanos();
        let missed = (late / interval) as u64;

        // Next deadline is the first interval boundary strictly after `now`.
        let advance = interval * (u128::from(missed) + 1);
        self.next_deadline += Duration::from_nanos(advance.min(u128::from(u64::MAX)) as u64);
        self.dropped_total += missed;

        TickOutcome {
            due: true,
            dropped: missed,
        }
    }
}

pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Scheduler { interval })
    }

    /// Render the current generation, then advance and render once per
    /// interval. Stops after `max_ticks` generations, or runs forever with
    /// `None`. Returns the number of generations advanced.
    pub fn run<R: Renderer + ?Sized>(
        &self,
        state: &mut State,
        renderer: &mut R,
        max_ticks: Option<u64>,
    ) -> io::Result<u64> {
        renderer.render(Frame::of(state))?;

        let mut ticker = Ticker::new(self.interval, Instant::now())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut ticks = 0u64;

        while max_ticks.map_or(true, |max| ticks < max) {
            thread::sleep(ticker.time_until_due(Instant::now()));

            let outcome = ticker.poll(Instant::now());
            if !outcome.due {
                continue;
            }
            if outcome.dropped > 0 {
                warn!(
                    "generation {} ran late, dropped {} tick(s)",
                    state.generation(),
                    outcome.dropped
                );
            }

            let started = Instant::now();
            state.advance();
            renderer.render(Frame::of(state))?;
            trace!(
                "tick {} took {} us",
                state.generation(),
                started.elapsed().as_micros()
            );

            ticks += 1;
        }

        Ok(ticks)
    }
}
