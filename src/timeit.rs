use std::time::Instant;

use crate::Result;

/// A successful computation result paired with its wall-clock duration.
#[derive(Debug)]
pub struct Timed<T> {
    /// Exactly the value the wrapped computation produced.
    pub value: T,
    /// Duration between invocation start and completion, truncated (not
    /// rounded) to whole microseconds.
    pub elapsed_micros: u64,
}

/// Invokes `f` exactly once and measures its wall-clock duration with a
/// steady clock.
///
/// On success the computation's value is paired with the elapsed time in
/// whole microseconds. On failure the error is propagated untouched and the
/// measurement is discarded; timing is only attached to outcomes the caller
/// considers successful.
///
/// The computation runs synchronously on the calling thread. This function
/// introduces no concurrency, no timeout, and no failure modes of its own.
pub fn timeit<T, F>(f: F) -> Result<Timed<T>>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    let value = result?;
    // Truncation, not rounding; saturating at u64::MAX.
    let elapsed_micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    tracing::trace!("timeit() ran for {elapsed_micros}us");
    Ok(Timed {
        value,
        elapsed_micros,
    })
}
