// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::Display;
use std::fmt::Formatter;

use common::{Theory, Trajectory};

use crate::{Solver, Throw, Verdict};

const NOT_COMPILED: &str = "This program was not compiled with support for a solver.";

/// This [Solver] is not a solver, and functions merely as a placeholder when no Solvers are compiled.
///
/// It ignores every assertion and can never decide.
pub struct NotASolver;

impl<'ctx> Solver<'ctx> for NotASolver {
    type Init = ();

    fn default_init() -> Self::Init {}

    fn new(_theory: Theory, _args: &'ctx Self::Init) -> Self {
        NotASolver
    }

    fn assert_collision(&mut self, _trajectory: &Trajectory) {}

    fn assert_distinct_times(&mut self) {}

    fn check(&mut self) -> Verdict {
        Verdict::Unknown
    }

    fn throw(&self) -> Result<Throw, String> {
        Err(NOT_COMPILED.into())
    }
}

impl Display for NotASolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<NotASolver>")
    }
}
