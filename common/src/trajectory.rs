// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::{Display, Formatter};

use crate::Theory;

/// The three components of a position or velocity, in the order `x`, `y`, `z`.
pub type Vector = [i64; 3];

/// A point moving through 3D integer space with a constant velocity.
///
/// The position is the location at time `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trajectory {
    /// The position at time `0`.
    pub position: Vector,

    /// The change in position per unit of time.
    pub velocity: Vector,
}

impl Trajectory {
    /// Create a new [Trajectory].
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    /// The position at the given time using 64-bit two's-complement arithmetic.
    ///
    /// # Example
    /// ```
    /// # use common::Trajectory;
    /// let trajectory = Trajectory::new([i64::MAX, 0, 0], [1, 2, 3]);
    /// assert_eq!(trajectory.position_at_wrapping(1), [i64::MIN, 2, 3]);
    /// ```
    pub fn position_at_wrapping(&self, time: i64) -> Vector {
        let mut result = self.position;
        for (p, v) in result.iter_mut().zip(self.velocity.iter()) {
            *p = p.wrapping_add(v.wrapping_mul(time));
        }
        result
    }

    /// The position at the given time without any overflow.
    ///
    /// # Example
    /// ```
    /// # use common::Trajectory;
    /// let trajectory = Trajectory::new([i64::MAX, 0, 0], [1, 2, 3]);
    /// assert_eq!(trajectory.position_at_exact(1), [i64::MAX as i128 + 1, 2, 3]);
    /// ```
    pub fn position_at_exact(&self, time: i64) -> [i128; 3] {
        let mut result = [0; 3];
        for (r, (&p, &v)) in result.iter_mut().zip(self.position.iter().zip(self.velocity.iter())) {
            // |v * t| <= 2^126, so the sum stays within i128.
            *r = p as i128 + v as i128 * time as i128;
        }
        result
    }

    /// The position at the given time following the arithmetic of the given [Theory].
    pub fn position_at(&self, time: i64, theory: Theory) -> [i128; 3] {
        match theory {
            Theory::BitVector => self.position_at_wrapping(time).map(i128::from),
            Theory::Integer => self.position_at_exact(time),
        }
    }
}

/// Formats the trajectory in the same layout as the input files.
impl Display for Trajectory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.position;
        let [vx, vy, vz] = self.velocity;
        write!(f, "{}, {}, {} @ {}, {}, {}", x, y, z, vx, vy, vz)
    }
}
