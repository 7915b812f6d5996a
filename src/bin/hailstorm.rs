// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains a binary printing the sum of the starting coordinates of the throw that hits every hailstone.

use hailstorm::cli::Arguments;
use hailstorm::common::time_it;
use hailstorm::hail::{solve, Hailstorm, Solver, SolverImpl};
use hailstorm::main;

/// Solve the hailstorm and print `x + y + z` of the throw.
fn solve_hailstorm(hailstorm: Hailstorm, arguments: Arguments) -> Result<(), String> {
    let solver_init = SolverImpl::default_init();
    let throw = time_it!(
        solve::<SolverImpl>(&hailstorm, &arguments.settings, &solver_init),
        "Solving"
    ).map_err(|e| e.to_string())?;
    println!("{}", throw.position_sum());
    Ok(())
}

main!(
    solver Solve,
    /// Find the throw for the given command line arguments.
    solve_hailstorm
);
