//!
//! A simple timer capable of measuring time intervals.
//!

use std::time::Duration;
use std::time::Instant;

///
/// A simple timer capable of measuring time intervals between invocations of
/// `[start]` and `[stop]` methods.
///
/// Uses the monotonic clock, so the end is never earlier than the start.
///
#[derive(Clone, Default, Debug)]
pub struct Timer {
    /// Start time.
    start: Option<Instant>,
    /// End time.
    end: Option<Instant>,
}

impl Timer {
    ///
    /// Creates a timer which is already ticking.
    ///
    pub fn started() -> Self {
        Self {
            start: Some(Instant::now()),
            end: None,
        }
    }

    /// Starts the timer. This sets the `start` time to the current time.
    ///
    /// # Errors
    ///
    /// If the timer was already started or stopped before.
    ///
    pub fn start(&mut self) -> anyhow::Result<()> {
        match (self.start, self.end) {
            (None, None) => {
                self.start = Some(Instant::now());
                Ok(())
            }
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    /// Stops the timer from ticking. Assumes the timer has been started with
    /// `[start]`.
    ///
    /// # Errors
    ///
    /// If the timer has not been started or if it was already stopped.
    ///
    pub fn stop(&mut self) -> anyhow::Result<()> {
        match (self.start, self.end) {
            (Some(_), None) => {
                self.end = Some(Instant::now());
                Ok(())
            }
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    ///
    /// Returns the elapsed time between the start and end of the timer.
    ///
    /// A running timer reports the time elapsed so far.
    ///
    pub fn elapsed(&self) -> anyhow::Result<Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(end.duration_since(start)),
            (Some(start), None) => Ok(start.elapsed()),
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    ///
    /// Returns the elapsed time in fractional milliseconds.
    ///
    pub fn elapsed_milliseconds(&self) -> anyhow::Result<f64> {
        self.elapsed()
            .map(|duration| duration.as_secs_f64() * 1000.0)
    }
}
