use std::cell::Cell;
use std::thread::sleep;
use std::time::Duration;

use clock_common::{timeit, Error};

#[test_log::test]
fn elapsed_covers_a_known_sleep() {
    let timed = timeit(|| {
        sleep(Duration::from_micros(50_000));
        Ok(42u32)
    })
    .unwrap();
    assert_eq!(timed.value, 42);
    // Scheduler slack only ever adds time.
    assert!(
        timed.elapsed_micros >= 50_000,
        "measured only {}us",
        timed.elapsed_micros
    );
}

#[test_log::test]
fn value_passes_through_unchanged() {
    let timed = timeit(|| Ok(42u64)).unwrap();
    assert_eq!(timed.value, 42);
}

#[test_log::test]
fn errors_propagate_without_timing() {
    let err = timeit(|| Err::<u32, Error>(Error::user("boom"))).unwrap_err();
    match err {
        Error::User(msg) => assert_eq!(msg, "boom"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test_log::test]
fn computation_runs_exactly_once_on_success() {
    let calls = Cell::new(0u32);
    timeit(|| {
        calls.set(calls.get() + 1);
        Ok(())
    })
    .unwrap();
    assert_eq!(calls.get(), 1);
}

#[test_log::test]
fn computation_runs_exactly_once_on_failure() {
    let calls = Cell::new(0u32);
    let result = timeit(|| {
        calls.set(calls.get() + 1);
        Err::<(), Error>(Error::user("boom"))
    });
    assert!(result.is_err());
    assert_eq!(calls.get(), 1);
}
