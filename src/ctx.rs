use std::mem;

use crate::clocks::host::monotonic_clock;
use crate::clocks::{HostMonotonicClock, TimeSpec};
use crate::Result;

pub struct ClockCtxBuilder {
    monotonic_clock: Box<dyn HostMonotonicClock>,
    built: bool,
}

impl ClockCtxBuilder {
    /// Creates a builder for a new context with default parameters set.
    ///
    /// The current default is the host implementation of the monotonic
    /// clock; it can be replaced via
    /// [`monotonic_clock`](ClockCtxBuilder::monotonic_clock).
    ///
    /// Note that each builder can only be used once to produce a
    /// [`ClockCtx`]. Invoking the [`build`](ClockCtxBuilder::build) method
    /// will panic on the second attempt.
    pub fn new() -> Self {
        Self {
            monotonic_clock: monotonic_clock(),
            built: false,
        }
    }

    /// Configures the monotonic read operation to use the `clock` specified.
    ///
    /// By default the host's monotonic clock is used.
    pub fn monotonic_clock(&mut self, clock: impl HostMonotonicClock + 'static) -> &mut Self {
        self.monotonic_clock = Box::new(clock);
        self
    }

    /// Uses the configured options to create a [`ClockCtx`].
    ///
    /// # Panics
    ///
    /// Panics if this method is called twice on the same builder.
    pub fn build(&mut self) -> ClockCtx {
        assert!(!self.built, "ClockCtxBuilder can only be used once");
        self.built = true;
        let monotonic_clock = mem::replace(&mut self.monotonic_clock, monotonic_clock());
        ClockCtx { monotonic_clock }
    }
}

impl Default for ClockCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-embedding clock state: the installed monotonic clock implementation.
///
/// Holds no other state; both read operations are stateless pass-throughs to
/// the installed clock.
pub struct ClockCtx {
    monotonic_clock: Box<dyn HostMonotonicClock>,
}

impl ClockCtx {
    /// Creates a context with the default (host) monotonic clock.
    pub fn new() -> Self {
        ClockCtxBuilder::new().build()
    }

    /// Reads the current monotonic time through the installed clock.
    ///
    /// Each call is an independent query; successive successful readings
    /// never decrease. A failed query is reported immediately, without
    /// retry.
    pub fn monotonic_time(&self) -> Result<TimeSpec> {
        let time = self.monotonic_clock.now()?;
        tracing::trace!("monotonic_time() = {time:?}");
        Ok(time)
    }

    /// Reports the granularity of the installed clock.
    pub fn monotonic_resolution(&self) -> Result<TimeSpec> {
        let resolution = self.monotonic_clock.resolution()?;
        tracing::trace!("monotonic_resolution() = {resolution:?}");
        Ok(resolution)
    }
}

impl Default for ClockCtx {
    fn default() -> Self {
        Self::new()
    }
}
