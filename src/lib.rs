//! Monotonic clock and timed-call host support for embedding runtimes.
//!
//! This crate provides the two leaf host operations an embedder wires up to
//! expose elapsed-time measurement to guest code: reading the OS monotonic
//! clock as a `(seconds, nanoseconds)` pair, and invoking a fallible host
//! computation while attaching its wall-clock duration in whole microseconds
//! to a successful result.
//!
//! The monotonic read goes through the [`HostMonotonicClock`] trait so that
//! embedders (and tests) can substitute their own clock source via
//! [`ClockCtxBuilder::monotonic_clock`]; [`timeit`] is a plain higher-order
//! function over [`std::time::Instant`] and needs no context.

#![deny(trivial_numeric_casts, unused_extern_crates, unstable_features)]
#![warn(unused_import_braces)]

pub mod clocks;
mod ctx;
mod error;
mod timeit;

pub use clocks::{HostMonotonicClock, TimeSpec};
pub use ctx::{ClockCtx, ClockCtxBuilder};
pub use error::{Error, Result};
pub use timeit::{timeit, Timed};
