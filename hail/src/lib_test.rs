// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::cell::Cell;
use std::fmt::{Display, Formatter};

use crate::verify::VerifyError;
use crate::*;

const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

/// The answers a [ScriptedSolver] gives, and a record of what was asserted.
struct Script {
    verdict: Verdict,
    throw: Option<Throw>,
    theory: Cell<Option<Theory>>,
    collisions: Cell<usize>,
    distinct: Cell<bool>,
}

impl Script {
    fn new(verdict: Verdict, throw: Option<Throw>) -> Self {
        Self { verdict, throw, theory: Cell::new(None), collisions: Cell::new(0), distinct: Cell::new(false) }
    }
}

/// This solver does not solve, but replays the answers of its [Script].
struct ScriptedSolver<'i> {
    script: &'i Script,
}

impl Display for ScriptedSolver<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<ScriptedSolver>")
    }
}

impl<'i> Solver<'i> for ScriptedSolver<'i> {
    type Init = Script;

    fn default_init() -> Self::Init {
        Script::new(Verdict::Unknown, None)
    }

    fn new(theory: Theory, script: &'i Self::Init) -> Self {
        script.theory.set(Some(theory));
        Self { script }
    }

    fn assert_collision(&mut self, _trajectory: &Trajectory) {
        assert!(!self.script.distinct.get(), "Collisions should be asserted before the distinct times");
        self.script.collisions.set(self.script.collisions.get() + 1);
    }

    fn assert_distinct_times(&mut self) {
        self.script.distinct.set(true);
    }

    fn check(&mut self) -> Verdict {
        self.script.verdict
    }

    fn throw(&self) -> Result<Throw, String> {
        self.script.throw.clone().ok_or_else(|| "No throw scripted".to_string())
    }
}

fn example_throw() -> Throw {
    Throw { trajectory: Trajectory::new([24, 13, 10], [-3, 1, 2]), times: vec![5, 3, 4, 6, 1] }
}

#[test]
fn test_parse_example() {
    let hailstorm = parse(EXAMPLE).expect("Example should parse");
    assert_eq!(hailstorm.len(), 5);
    assert_eq!(hailstorm.trajectories[0], Trajectory::new([19, 13, 30], [-2, 1, -2]));
    assert_eq!(hailstorm.trajectories[4], Trajectory::new([20, 19, 15], [1, -5, -3]));
}

#[test]
fn test_parse_empty() {
    match parse("\n\n") {
        Ok(hailstorm) => assert!(hailstorm.is_empty()),
        Err(e) => panic!("Empty lines should be skipped: {}", e),
    }
}

#[test]
fn test_parse_missing_separator() {
    match parse("1, 2, 3 @ 4, -5, 6\n1, 2, 3, 4, -5, 6\n") {
        Ok(_) => panic!("No result should be provided."),
        Err(e) => assert!(e.starts_with("Line 2"), "{}", e),
    }
}

#[test]
fn test_parse_trajectory() {
    assert_eq!(parse_trajectory("24, 13, 10 @ -3, 1, 2"), Ok(Trajectory::new([24, 13, 10], [-3, 1, 2])));
    assert!(parse_trajectory("24, 13, 10").is_err());
}

#[test]
fn test_parse_file_missing() {
    assert!(parse_file("this/file/does/not/exist.txt").is_err());
}

#[test]
fn test_select() {
    let hailstorm = parse(EXAMPLE).unwrap();
    assert_eq!(hailstorm.select(Some(2)).map(<[Trajectory]>::len), Ok(2));
    assert_eq!(hailstorm.select(Some(20)).map(<[Trajectory]>::len), Ok(5));
    assert_eq!(hailstorm.select(None).map(<[Trajectory]>::len), Ok(5));
    assert_eq!(hailstorm.select(Some(0)), Err(SolveError::InvalidPrefix));
    assert_eq!(Hailstorm::default().select(None), Err(SolveError::NoTrajectories));
}

#[test]
fn test_solve_satisfiable() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let script = Script::new(Verdict::Satisfiable, Some(example_throw()));
    let throw = solve::<ScriptedSolver>(&hailstorm, &Settings::default(), &script).expect("The scripted throw is valid");
    assert_eq!(throw.position_sum(), 47);
    assert_eq!(script.collisions.get(), 5);
    assert!(script.distinct.get());
    assert_eq!(script.theory.get(), Some(Theory::BitVector));
}

#[test]
fn test_solve_prefix() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let mut throw = example_throw();
    throw.times.truncate(3);
    let script = Script::new(Verdict::Satisfiable, Some(throw));
    let settings = Settings { prefix: Some(3), theory: Theory::Integer, dump_constraints: true };
    assert!(solve::<ScriptedSolver>(&hailstorm, &settings, &script).is_ok());
    assert_eq!(script.collisions.get(), 3);
    assert_eq!(script.theory.get(), Some(Theory::Integer));
}

#[test]
fn test_solve_no_solution() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let script = Script::new(Verdict::Unsatisfiable, None);
    assert_eq!(solve::<ScriptedSolver>(&hailstorm, &Settings::default(), &script), Err(SolveError::Unsatisfiable));
    let script = Script::new(Verdict::Unknown, None);
    assert_eq!(solve::<ScriptedSolver>(&hailstorm, &Settings::default(), &script), Err(SolveError::Unknown));
}

#[test]
fn test_solve_missing_model() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let script = Script::new(Verdict::Satisfiable, None);
    assert_eq!(
        solve::<ScriptedSolver>(&hailstorm, &Settings::default(), &script),
        Err(SolveError::Model("No throw scripted".to_string())),
    );
}

#[test]
fn test_solve_inconsistent_model() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let mut throw = example_throw();
    throw.times[1] = 5;
    let script = Script::new(Verdict::Satisfiable, Some(throw));
    assert_eq!(
        solve::<ScriptedSolver>(&hailstorm, &Settings::default(), &script),
        Err(SolveError::Inconsistent(VerifyError::Miss { index: 1, time: 5 })),
    );
}

#[test]
fn test_solve_invalid_input() {
    let script = Script::new(Verdict::Satisfiable, Some(example_throw()));
    assert_eq!(solve::<ScriptedSolver>(&Hailstorm::default(), &Settings::default(), &script), Err(SolveError::NoTrajectories));
    let settings = Settings { prefix: Some(0), ..Settings::default() };
    assert_eq!(solve::<ScriptedSolver>(&parse(EXAMPLE).unwrap(), &settings, &script), Err(SolveError::InvalidPrefix));
    assert_eq!(script.collisions.get(), 0);
}

#[test]
fn test_not_a_solver() {
    let hailstorm = parse(EXAMPLE).unwrap();
    let solver_init = NotASolver::default_init();
    assert_eq!(solve::<NotASolver>(&hailstorm, &Settings::default(), &solver_init), Err(SolveError::Unknown));
}

#[test]
fn test_error_messages() {
    assert_eq!(SolveError::Unsatisfiable.to_string(), "No solution found: the constraints are unsatisfiable");
    assert_eq!(
        SolveError::Inconsistent(VerifyError::NotPositive { index: 3, time: -1 }).to_string(),
        "The model is inconsistent: trajectory 3 is hit at non-positive time -1",
    );
}
