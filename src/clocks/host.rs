use rustix::time::{clock_getres, clock_gettime_dynamic, ClockId, DynamicClockId, Timespec};

use crate::clocks::{HostMonotonicClock, TimeSpec};
use crate::{Error, Result};

/// The system monotonic clock, backed by `clock_gettime(CLOCK_MONOTONIC)`.
pub struct MonotonicClock;

impl HostMonotonicClock for MonotonicClock {
    fn now(&self) -> Result<TimeSpec> {
        let ts = clock_gettime_dynamic(DynamicClockId::Known(ClockId::Monotonic)).map_err(
            |errno| {
                tracing::warn!("clock_gettime(CLOCK_MONOTONIC) failed: {errno}");
                Error::ClockUnavailable
            },
        )?;
        Ok(split_timespec(ts))
    }

    fn resolution(&self) -> Result<TimeSpec> {
        Ok(split_timespec(clock_getres(ClockId::Monotonic)))
    }
}

// tv_sec is signed in the syscall ABI; the host record is unsigned.
fn split_timespec(ts: Timespec) -> TimeSpec {
    TimeSpec {
        seconds: ts.tv_sec as u64,
        nanoseconds: ts.tv_nsec as u64,
    }
}

/// Returns the default clock implementation, the host's own monotonic clock.
pub fn monotonic_clock() -> Box<dyn HostMonotonicClock> {
    Box::new(MonotonicClock)
}
