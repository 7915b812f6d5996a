// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains a binary which can check whether a throw hits every selected hailstone at a distinct positive time.
//!
//! Does not need a solver, all collision times are computed exactly.

use hailstorm::cli::Arguments;
use hailstorm::hail::verify::{collision, verify, Collision};
use hailstorm::hail::{Hailstorm, Theory, Throw};
use hailstorm::main;

/// Does the actual checking of the throw.
fn check_throw(hailstorm: Hailstorm, arguments: Arguments) -> Result<(), String> {
    let trajectory = arguments.throw.ok_or("Provide the throw to check with --throw")?;
    let selection = hailstorm.select(arguments.settings.prefix).map_err(|e| e.to_string())?;

    let mut times = Vec::with_capacity(selection.len());
    for (index, hailstone) in selection.iter().enumerate() {
        match collision(&trajectory, hailstone) {
            Collision::At(time) => times.push(time),
            Collision::Always => return Err(format!("Trajectory {} ({}) is the throw itself, there is no unique collision time", index, hailstone)),
            Collision::Never => return Err(format!("Trajectory {} ({}) is never hit", index, hailstone)),
        }
    }

    let throw = Throw { trajectory, times };
    verify(&throw, selection, Theory::Integer).map_err(|e| e.to_string())?;

    for (index, time) in throw.times.iter().enumerate() {
        println!("{}: {}", index, time);
    }
    println!("Sum: {}", throw.position_sum());
    Ok(())
}

main!(
    Check,
    /// Check the throw provided on the command line.
    check_throw
);
