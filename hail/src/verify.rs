// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! Checks for throws that do not depend on any solver.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use common::{Theory, Trajectory};

use crate::Throw;

/// The first violation found by [verify].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The throw does not have exactly one time per trajectory.
    TimeCount {
        /// The number of trajectories.
        expected: usize,
        /// The number of times in the throw.
        found: usize,
    },

    /// A collision time is zero or negative.
    NotPositive {
        /// The index of the trajectory.
        index: usize,
        /// The offending time.
        time: i64,
    },

    /// The throw and the trajectory are not at the same position at the recorded time.
    Miss {
        /// The index of the trajectory.
        index: usize,
        /// The recorded time.
        time: i64,
    },

    /// Two trajectories are hit at the same time.
    SharedTime {
        /// The index of the trajectory hit first in the selection.
        first: usize,
        /// The index of the other trajectory.
        second: usize,
        /// The shared time.
        time: i64,
    },
}

impl Display for VerifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyError::TimeCount { expected, found } => write!(f, "expected {} collision times, found {}", expected, found),
            VerifyError::NotPositive { index, time } => write!(f, "trajectory {} is hit at non-positive time {}", index, time),
            VerifyError::Miss { index, time } => write!(f, "trajectory {} is missed at time {}", index, time),
            VerifyError::SharedTime { first, second, time } => write!(f, "trajectories {} and {} are both hit at time {}", first, second, time),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Check that the throw hits every trajectory at its recorded time, that all times are positive, and that no two times
/// are equal.
///
/// Positions are computed following the given [Theory], so a bit-vector model is checked with wraparound arithmetic.
///
/// # Example
/// ```
/// use hail::{Theory, Throw, Trajectory};
/// use hail::verify::verify;
///
/// let throw = Throw { trajectory: Trajectory::new([24, 13, 10], [-3, 1, 2]), times: vec![5, 3] };
/// let trajectories = [Trajectory::new([19, 13, 30], [-2, 1, -2]), Trajectory::new([18, 19, 22], [-1, -1, -2])];
/// assert_eq!(verify(&throw, &trajectories, Theory::Integer), Ok(()));
/// ```
pub fn verify(throw: &Throw, trajectories: &[Trajectory], theory: Theory) -> Result<(), VerifyError> {
    if throw.times.len() != trajectories.len() {
        return Err(VerifyError::TimeCount { expected: trajectories.len(), found: throw.times.len() });
    }

    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(trajectories.len());
    for (index, (trajectory, &time)) in trajectories.iter().zip(throw.times.iter()).enumerate() {
        if time <= 0 {
            return Err(VerifyError::NotPositive { index, time });
        }
        if throw.trajectory.position_at(time, theory) != trajectory.position_at(time, theory) {
            return Err(VerifyError::Miss { index, time });
        }
        if let Some(first) = seen.insert(time, index) {
            return Err(VerifyError::SharedTime { first, second: index, time });
        }
    }
    Ok(())
}

/// How a throw meets a trajectory, computed with exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// They are at the same position at exactly this time, which may be zero or negative.
    At(i64),

    /// The trajectories are identical, so they are at the same position at every time.
    Always,

    /// They never meet at an integer time that fits in 64 bits.
    Never,
}

/// Determine when the throw and the trajectory are at the same position.
///
/// # Example
/// ```
/// use hail::Trajectory;
/// use hail::verify::{collision, Collision};
///
/// let throw = Trajectory::new([24, 13, 10], [-3, 1, 2]);
/// assert_eq!(collision(&throw, &Trajectory::new([19, 13, 30], [-2, 1, -2])), Collision::At(5));
/// assert_eq!(collision(&throw, &throw), Collision::Always);
/// ```
pub fn collision(throw: &Trajectory, trajectory: &Trajectory) -> Collision {
    let mut result: Option<i128> = None;
    for axis in 0..3 {
        // throw.p + throw.v * t == trajectory.p + trajectory.v * t
        let distance = trajectory.position[axis] as i128 - throw.position[axis] as i128;
        let closing = throw.velocity[axis] as i128 - trajectory.velocity[axis] as i128;
        if closing == 0 {
            if distance != 0 {
                return Collision::Never;
            }
            continue;
        }
        if distance % closing != 0 {
            return Collision::Never;
        }
        let time = distance / closing;
        match result {
            Some(other) if other != time => return Collision::Never,
            _ => result = Some(time),
        }
    }
    match result {
        None => Collision::Always,
        Some(time) => i64::try_from(time).map_or(Collision::Never, Collision::At),
    }
}

/// The unique time at which the throw and the trajectory are at the same position, using exact arithmetic.
///
/// Returns `None` if they never meet, only meet in between integer times, or meet at every time (identical trajectories).
/// The returned time may be zero or negative.
///
/// # Example
/// ```
/// use hail::Trajectory;
/// use hail::verify::collision_time;
///
/// let throw = Trajectory::new([24, 13, 10], [-3, 1, 2]);
/// assert_eq!(collision_time(&throw, &Trajectory::new([19, 13, 30], [-2, 1, -2])), Some(5));
/// assert_eq!(collision_time(&throw, &Trajectory::new([19, 13, 30], [-3, 1, 2])), None);
/// ```
pub fn collision_time(throw: &Trajectory, trajectory: &Trajectory) -> Option<i64> {
    match collision(throw, trajectory) {
        Collision::At(time) => Some(time),
        Collision::Always | Collision::Never => None,
    }
}
