// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use common::{Theory, Trajectory};

use crate::Throw;

/// The answer of a [Solver] to a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A model exists and can be retrieved with [Solver::throw].
    Satisfiable,

    /// No assignment satisfies the constraints.
    Unsatisfiable,

    /// The solver could not decide.
    Unknown,
}

/// This trait represents any type of solver and allows for switching between backends without too much effort.
///
/// The unknowns are the position and velocity of the throw, plus one collision time per asserted trajectory.
pub trait Solver<'i>: std::fmt::Display {
    /// This is the type of any object that needs to be provided to the constructor.
    ///
    /// The [crate::Z3Solver] requires a context, which can not be created inside the constructor because the solver borrows it.
    type Init: Sized + 'i;

    /// Create the objects required to call the constructor.
    fn default_init() -> Self::Init;

    /// Create a new [Solver] without any constraints. Normally called by [crate::solve].
    fn new(theory: Theory, args: &'i Self::Init) -> Self;

    /// Add a collision time for the given trajectory, require it to be positive, and require the throw to meet the
    /// trajectory at that time.
    fn assert_collision(&mut self, trajectory: &Trajectory);

    /// Require all collision times added so far to be pairwise distinct.
    fn assert_distinct_times(&mut self);

    /// Check the constraints asserted so far.
    fn check(&mut self) -> Verdict;

    /// Read the throw from the model found by the last [Solver::check].
    ///
    /// The times are in the order in which the trajectories were asserted.
    fn throw(&self) -> Result<Throw, String>;

    /// Assert the collisions with all given trajectories, followed by the distinct times.
    fn assert_all(&mut self, trajectories: &[Trajectory]) {
        for trajectory in trajectories {
            self.assert_collision(trajectory);
        }
        self.assert_distinct_times();
    }
}
