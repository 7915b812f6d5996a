// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! Counts the pairs of hailstones whose paths cross inside a test area, looking only at the X and Y axes.
//!
//! The paths are rays starting at the current position, so crossings in the past do not count.
//! Intersections are compared as exact fractions, no floating point is involved.

use std::fmt::{Display, Formatter};

use common::{Trajectory, DEFAULT_AREA_HIGH, DEFAULT_AREA_LOW};

/// The square test area, bounds inclusive, used for both the X and the Y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    /// The smallest coordinate inside the area.
    pub low: i64,

    /// The largest coordinate inside the area.
    pub high: i64,
}

impl Default for Area {
    fn default() -> Self {
        Self { low: DEFAULT_AREA_LOW, high: DEFAULT_AREA_HIGH }
    }
}

/// The intermediate products of a pair did not fit in 128 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingError {
    /// The index of the first trajectory of the pair.
    pub first: usize,

    /// The index of the second trajectory of the pair.
    pub second: usize,
}

impl Display for CrossingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the crossing of trajectories {} and {} overflows 128-bit arithmetic", self.first, self.second)
    }
}

impl std::error::Error for CrossingError {}

type Plane = [i128; 2];

fn plane(vector: &[i64; 3]) -> Plane {
    [vector[0] as i128, vector[1] as i128]
}

fn cross(a: Plane, b: Plane) -> Option<i128> {
    a[0].checked_mul(b[1])?.checked_sub(a[1].checked_mul(b[0])?)
}

/// Returns whether the future paths of both trajectories cross inside the area.
///
/// Parallel paths never cross, even when they overlap. A crossing at time zero counts.
/// Returns `None` if the computation overflows.
///
/// # Example
/// ```
/// use hail::Trajectory;
/// use hail::crossings::{crosses, Area};
///
/// let area = Area { low: 7, high: 27 };
/// let first = Trajectory::new([19, 13, 30], [-2, 1, -2]);
/// assert_eq!(crosses(&first, &Trajectory::new([18, 19, 22], [-1, -1, -2]), area), Some(true));
/// assert_eq!(crosses(&first, &Trajectory::new([20, 19, 15], [1, -5, -3]), area), Some(false));
/// ```
pub fn crosses(first: &Trajectory, second: &Trajectory, area: Area) -> Option<bool> {
    let (p1, v1) = (plane(&first.position), plane(&first.velocity));
    let (p2, v2) = (plane(&second.position), plane(&second.velocity));

    // p1 + v1 * s == p2 + v2 * u, with s == s_num / d and u == u_num / d.
    let mut d = cross(v1, v2)?;
    if d == 0 {
        return Some(false);
    }
    let offset = [p2[0] - p1[0], p2[1] - p1[1]];
    let mut s_num = cross(offset, v2)?;
    let mut u_num = cross(offset, v1)?;
    if d < 0 {
        d = -d;
        s_num = -s_num;
        u_num = -u_num;
    }
    if s_num < 0 || u_num < 0 {
        return Some(false);
    }

    let low = (area.low as i128).checked_mul(d)?;
    let high = (area.high as i128).checked_mul(d)?;
    for axis in 0..2 {
        // The coordinate of the crossing, scaled by d.
        let scaled = p1[axis].checked_mul(d)?.checked_add(v1[axis].checked_mul(s_num)?)?;
        if scaled < low || scaled > high {
            return Some(false);
        }
    }
    Some(true)
}

/// Count the unordered pairs of trajectories whose future paths cross inside the area.
pub fn count_crossings(trajectories: &[Trajectory], area: Area) -> Result<usize, CrossingError> {
    let mut count = 0;
    for (first, a) in trajectories.iter().enumerate() {
        for (second, b) in trajectories.iter().enumerate().skip(first + 1) {
            if crosses(a, b, area).ok_or(CrossingError { first, second })? {
                count += 1;
            }
        }
    }
    Ok(count)
}

#[cfg(test)]
mod crossings_tests {
    use super::*;

    const AREA: Area = Area { low: 7, high: 27 };

    fn example() -> Vec<Trajectory> {
        vec![
            Trajectory::new([19, 13, 30], [-2, 1, -2]),
            Trajectory::new([18, 19, 22], [-1, -1, -2]),
            Trajectory::new([20, 25, 34], [-2, -2, -4]),
            Trajectory::new([12, 31, 28], [-1, -2, -1]),
            Trajectory::new([20, 19, 15], [1, -5, -3]),
        ]
    }

    #[test]
    fn test_count_example() {
        assert_eq!(count_crossings(&example(), AREA), Ok(2));
        assert_eq!(count_crossings(&example(), Area { low: -100, high: 100 }), Ok(5));
        assert_eq!(count_crossings(&example()[..1], AREA), Ok(0));
        assert_eq!(count_crossings(&[], AREA), Ok(0));
    }

    #[test]
    fn test_crosses_example_pairs() {
        let hail = example();
        // Inside at (14.333, 15.333) and (11.667, 16.667).
        assert_eq!(crosses(&hail[0], &hail[1], AREA), Some(true));
        assert_eq!(crosses(&hail[0], &hail[2], AREA), Some(true));
        // Outside at (6.2, 19.4).
        assert_eq!(crosses(&hail[0], &hail[3], AREA), Some(false));
        // In the past of the first.
        assert_eq!(crosses(&hail[0], &hail[4], AREA), Some(false));
        // Parallel.
        assert_eq!(crosses(&hail[1], &hail[2], AREA), Some(false));
        // Symmetric.
        assert_eq!(crosses(&hail[1], &hail[0], AREA), Some(true));
    }

    #[test]
    fn test_crosses_edges() {
        let area = Area { low: 0, high: 10 };
        let right = Trajectory::new([0, 5, 0], [1, 0, 0]);
        // Meets exactly on the boundary.
        assert_eq!(crosses(&right, &Trajectory::new([10, 0, 0], [0, 1, 0]), area), Some(true));
        assert_eq!(crosses(&right, &Trajectory::new([11, 0, 0], [0, 1, 0]), area), Some(false));
        // Meets at time zero of the second path.
        assert_eq!(crosses(&right, &Trajectory::new([3, 5, 0], [0, 1, 0]), area), Some(true));
        // The Z axis is ignored.
        assert_eq!(crosses(&right, &Trajectory::new([4, 0, 100], [0, 1, -7]), area), Some(true));
        // Overlapping parallel paths.
        assert_eq!(crosses(&right, &Trajectory::new([2, 5, 0], [2, 0, 0]), area), Some(false));
    }

    #[test]
    fn test_overflow() {
        let first = Trajectory::new([i64::MIN, i64::MAX, 0], [1, 0, 0]);
        let second = Trajectory::new([i64::MAX, i64::MIN, 0], [i64::MAX, i64::MAX, 0]);
        assert_eq!(count_crossings(&[first, second], AREA), Err(CrossingError { first: 0, second: 1 }));
    }
}
