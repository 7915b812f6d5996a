// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate finds the throw that hits every hailstone of a hailstorm:
//!   * [hail] Parses hailstorms and encodes the collisions for an SMT solver.
//!   * [cli] Parses the command line arguments.
//!   * [common] The trajectory type and other shared helpers.
//!
//! # Features
//! This crate provides the following optional features:
//!   * `constraints-common` Feature to remove any errors related to unimplemented solver wrappers.
//!   * `constraints-z3` Add support for the Z3 solver.
//!   * `constraints` Implies `constraints-z3`.
//!   * `sub-time` Print the timings for all the [common::sub_time_it] calls.
//!
//! Without a solver feature the binaries refuse to run.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use cli;
pub use common;
pub use hail;

/// The message returned by the binaries when no solver is compiled in.
pub const NO_SOLVER: &str = "This program was not compiled with support for a solver, enable the `constraints-z3` feature.";

/// Create a main method which parses the command line arguments and calls the specified method with the result.
///
/// The [cli::Tool] decides which arguments are accepted.
/// The generated `main` returns a `Result<(), String>`, so any error ends the process with a failure exit code.
///
/// # Examples
/// ## Create the entire main method
/// ```
/// use hailstorm::cli::Arguments;
/// use hailstorm::hail::Hailstorm;
/// use hailstorm::main;
///
/// fn print_count(hailstorm: Hailstorm, _arguments: Arguments) -> Result<(), String> {
///     println!("{} trajectories", hailstorm.len());
///     Ok(())
/// }
///
/// main!(Crossings, print_count);
/// ```
///
/// ## Require a solver
/// ```
/// use hailstorm::cli::Arguments;
/// use hailstorm::hail::Hailstorm;
/// use hailstorm::main;
///
/// fn print_count(hailstorm: Hailstorm, _arguments: Arguments) -> Result<(), String> {
///     println!("{} trajectories", hailstorm.len());
///     Ok(())
/// }
///
/// main!(solver Solve, print_count);
/// ```
#[macro_export]
macro_rules! main {
    (solver $tool:ident, $(#[$outer:meta])* $method:ident) => {
        $(#[$outer])*
        fn main() -> Result<(), String> {
            if !$crate::hail::SOLVER_AVAILABLE {
                return Err($crate::NO_SOLVER.into());
            }
            let (hailstorm, arguments) = $crate::common::time_it!($crate::cli::parse_arguments($crate::cli::Tool::$tool, file!(), $crate::cli::crate_version!()), "Parsing")?;
            $method(hailstorm, arguments)
        }
    };

    ($tool:ident, $(#[$outer:meta])* $method:ident) => {
        $(#[$outer])*
        fn main() -> Result<(), String> {
            let (hailstorm, arguments) = $crate::common::time_it!($crate::cli::parse_arguments($crate::cli::Tool::$tool, file!(), $crate::cli::crate_version!()), "Parsing")?;
            $method(hailstorm, arguments)
        }
    };
}
