// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains a binary printing how many pairs of hailstones have future paths crossing inside the test area.
//!
//! Only the X and Y axes are considered. Does not need a solver.

use hailstorm::cli::Arguments;
use hailstorm::common::time_it;
use hailstorm::hail::crossings::count_crossings;
use hailstorm::hail::Hailstorm;
use hailstorm::main;

/// Count the crossing pairs and print the count.
fn print_crossings(hailstorm: Hailstorm, arguments: Arguments) -> Result<(), String> {
    let count = time_it!(count_crossings(&hailstorm.trajectories, arguments.area), "Counting").map_err(|e| e.to_string())?;
    println!("{}", count);
    Ok(())
}

main!(
    Crossings,
    /// Count the crossings for the given command line arguments.
    print_crossings
);
