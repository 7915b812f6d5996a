// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides all the tools necessary to parse hailstorm files and to find the throw that hits every hailstone.
//! It also provides wrappers around (SMT) solvers.
//!
//! # Features
//! There are a few available features:
//!   * `constraints-common` Feature to remove any errors related to unimplemented solver wrappers.
//!   * `constraints-z3` Add support for the Z3 solver.
//!   * `constraints` Implies `constraints-z3`.
//!
//! # Hailstorm
//! A hailstorm file contains one [Trajectory] per line, in the layout `x, y, z @ vx, vy, vz`.
//! The [Hailstorm] keeps the trajectories in the order of the file.
//!
//! # Solvers
//! There currently is one solver supported:
//!   * [Z3Solver], which is the frontend of Z3.
//!     Bindings to this SMT solver are provided by [z3].
//!
//! There also is a Solver called [NotASolver], which is used as a placeholder when no solvers are compiled (see the features).
//!
//! Two checks do not need a solver at all: [verify] computes collision times exactly, and [crossings] counts the
//! pairs of hailstones whose paths cross in the XY plane.
//!
//! # Example
//! ```
//! use hail::{Settings, Solver, SolverImpl};
//!
//! let hailstorm = hail::parse("
//!     19, 13, 30 @ -2,  1, -2
//!     18, 19, 22 @ -1, -1, -2
//!     20, 25, 34 @ -2, -2, -4
//!     12, 31, 28 @ -1, -2, -1
//!     20, 19, 15 @  1, -5, -3
//! ").expect("Parsing error occurred");
//! assert_eq!(hailstorm.len(), 5);
//!
//! if cfg!(feature = "constraints-common") {
//!     let solver_init = SolverImpl::default_init();
//!     let throw = hail::solve::<SolverImpl>(&hailstorm, &Settings::default(), &solver_init).expect("No throw found");
//!     assert_eq!(throw.times.len(), 5);
//! }
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::fmt::{Display, Formatter};
use std::fs::read_to_string;
use std::path::Path;

pub use common::{Theory, Trajectory, Vector};
pub use constraints::solver::{Solver, Verdict};
pub use constraints::solver_not_implemented::NotASolver;
#[cfg(feature = "constraints-z3")]
pub use constraints::solver_z3::Z3Solver;
use verify::VerifyError;

#[cfg(feature = "constraints-z3")]
/// This type points to the default Solver, which currently is [Z3Solver].
///
/// If no features are activated the [NotASolver] is used.
/// If the `constraints-z3` feature is set, then the [Z3Solver] is used.
pub type SolverImpl<'ctx> = Z3Solver<'ctx>;

#[cfg(not(feature = "constraints-z3"))]
/// This type points to the default Solver, which currently is [NotASolver].
///
/// If no features are activated the [NotASolver] is used.
/// If the `constraints-z3` feature is set, then the [Z3Solver] is used.
pub type SolverImpl<'ctx> = NotASolver;

/// True if this crate was compiled with a real solver behind [SolverImpl].
pub const SOLVER_AVAILABLE: bool = cfg!(feature = "constraints-common");

mod constraints;
pub mod crossings;
mod parser;
pub mod verify;

/// The trajectories of a hailstorm, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hailstorm {
    /// The trajectories of the hailstones.
    pub trajectories: Vec<Trajectory>,
}

impl Hailstorm {
    /// Wrap the given trajectories.
    pub fn new(trajectories: Vec<Trajectory>) -> Self {
        Self { trajectories }
    }

    /// The number of trajectories.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Returns true if there are no trajectories.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// The leading trajectories to encode.
    ///
    /// `None` selects all trajectories, as does a prefix longer than the hailstorm.
    pub fn select(&self, prefix: Option<usize>) -> Result<&[Trajectory], SolveError> {
        if prefix == Some(0) {
            return Err(SolveError::InvalidPrefix);
        }
        if self.is_empty() {
            return Err(SolveError::NoTrajectories);
        }
        let end = prefix.map_or(self.len(), |prefix| prefix.min(self.len()));
        Ok(&self.trajectories[..end])
    }
}

/// The trajectory that hits every selected hailstone, and when it does so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    /// The position and velocity of the throw.
    pub trajectory: Trajectory,

    /// The collision time for every selected trajectory, in the order of selection.
    pub times: Vec<i64>,
}

impl Throw {
    /// The sum of the coordinates of the starting position.
    ///
    /// Computed in [i128], so the sum itself never overflows.
    pub fn position_sum(&self) -> i128 {
        self.trajectory.position.iter().map(|&p| p as i128).sum()
    }
}

impl Display for Throw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.trajectory.fmt(f)
    }
}

/// The settings of the constraint solver driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The number of leading trajectories to encode, or `None` for all of them.
    pub prefix: Option<usize>,

    /// The arithmetic to encode the collisions in.
    pub theory: Theory,

    /// Print the constraint system to stderr before checking it.
    pub dump_constraints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { prefix: Some(common::DEFAULT_PREFIX), theory: Theory::default(), dump_constraints: false }
    }
}

/// The reasons [solve] can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The hailstorm does not contain a single trajectory.
    NoTrajectories,

    /// A prefix of zero trajectories was requested.
    InvalidPrefix,

    /// No throw hits all selected trajectories.
    Unsatisfiable,

    /// The solver gave up.
    Unknown,

    /// The solver claimed satisfiability, but the model could not be read.
    Model(String),

    /// The model does not hold up when checked outside the solver.
    Inconsistent(VerifyError),
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NoTrajectories => f.write_str("No trajectories provided"),
            SolveError::InvalidPrefix => write!(f, "The prefix should be at least {}", common::MIN_PREFIX),
            SolveError::Unsatisfiable => f.write_str("No solution found: the constraints are unsatisfiable"),
            SolveError::Unknown => f.write_str("No solution found: the solver could not decide"),
            SolveError::Model(e) => write!(f, "Could not read the model: {}", e),
            SolveError::Inconsistent(e) => write!(f, "The model is inconsistent: {}", e),
        }
    }
}

impl std::error::Error for SolveError {}

/// Find the throw hitting all trajectories selected by the settings, each at a distinct positive time.
///
/// The found throw is verified with [verify::verify] before it is returned.
pub fn solve<'i, S: Solver<'i>>(hailstorm: &Hailstorm, settings: &Settings, solver_init: &'i S::Init) -> Result<Throw, SolveError> {
    let selection = hailstorm.select(settings.prefix)?;

    let mut solver = S::new(settings.theory, solver_init);
    common::sub_time_it!(solver.assert_all(selection), "Encoding");

    if settings.dump_constraints {
        eprintln!("{}", solver);
    }

    match common::sub_time_it!(solver.check(), "Checking") {
        Verdict::Satisfiable => {}
        Verdict::Unsatisfiable => return Err(SolveError::Unsatisfiable),
        Verdict::Unknown => return Err(SolveError::Unknown),
    }

    let throw = solver.throw().map_err(SolveError::Model)?;
    verify::verify(&throw, selection, settings.theory).map_err(SolveError::Inconsistent)?;
    Ok(throw)
}

/// Parse the given `str` and return the [Hailstorm].
pub fn parse(text: &str) -> Result<Hailstorm, String> {
    Ok(Hailstorm::new(parser::trajectories::parse(text)?))
}

/// Parse the file at the given path and return the [Hailstorm].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Hailstorm, String> {
    let path = path.as_ref();
    let contents = read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    parse(&contents)
}

/// Parse a single trajectory, such as a throw provided on the command line.
pub fn parse_trajectory(line: &str) -> Result<Trajectory, String> {
    parser::trajectories::parse_line(line)
}

#[cfg(test)]
mod lib_test;
