// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides the data-types and helpers shared by the other crates of Hailstorm.
//!
//! # Features
//!   * `sub-time` Print the timings for all the [sub_time_it] calls.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use theory::Theory;
pub use trajectory::{Trajectory, Vector};

mod theory;
mod trajectory;


/// The number of leading trajectories encoded into the constraint system by default.
pub const DEFAULT_PREFIX: usize = 20;

/// The smallest prefix that can be encoded.
pub const MIN_PREFIX: usize = 1;

/// The width of the bit-vectors used by [Theory::BitVector].
pub const BIT_WIDTH: u32 = 64;

/// The input file used when no other file is provided.
pub const DEFAULT_INPUT: &str = "inputs/input.txt";

/// The lower bound of both coordinates of the default test area for crossing paths.
pub const DEFAULT_AREA_LOW: i64 = 200_000_000_000_000;

/// The upper bound of both coordinates of the default test area for crossing paths.
pub const DEFAULT_AREA_HIGH: i64 = 400_000_000_000_000;

/// Print the time it took to provide the result of the provided expression to stderr.
/// Returns the result of the provided expression.
///
/// Stdout is reserved for the answer, so the timings never end up there.
///
/// # Example
/// ```
/// use common::time_it;
///
/// time_it!(0 + 1, "Addition");
/// ```
#[macro_export]
macro_rules! time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        eprintln!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has been set.
#[cfg(feature = "sub-time")]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        eprintln!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has not been set.
#[cfg(not(feature = "sub-time"))]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{$code}};
}
