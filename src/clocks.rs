pub mod host;

use crate::Result;

/// A single reading of a monotonic clock, split into whole seconds and the
/// sub-second remainder in nanoseconds.
///
/// The epoch is unspecified: readings are only meaningful when differenced
/// against other readings taken within the same process lifetime. The OS
/// guarantees successive readings never decrease.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeSpec {
    pub seconds: u64,
    /// Always in `0..1_000_000_000`.
    pub nanoseconds: u64,
}

/// A monotonic clock source, queried by the embedder-facing read operation.
///
/// The default implementation ([`host::MonotonicClock`]) reads the OS clock;
/// embedders install a custom one through
/// [`ClockCtxBuilder::monotonic_clock`](crate::ClockCtxBuilder::monotonic_clock).
pub trait HostMonotonicClock: Send + Sync {
    /// Returns the current reading of the clock.
    fn now(&self) -> Result<TimeSpec>;

    /// Returns the granularity of the clock.
    fn resolution(&self) -> Result<TimeSpec>;
}
