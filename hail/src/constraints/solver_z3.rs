// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::Display;
use std::fmt::{Error, Formatter};

use z3::ast::{Ast, Bool, BV, Int};
use z3::SatResult;

use common::{Theory, Trajectory, BIT_WIDTH};

use crate::{Solver, Throw, Verdict};

const POSITION_NAMES: [&str; 3] = ["x", "y", "z"];
const VELOCITY_NAMES: [&str; 3] = ["vx", "vy", "vz"];

fn time_name(index: usize) -> String {
    format!("t_{}", index)
}

/// The arithmetic needed to encode the collisions, implemented for both the bit-vector and the integer sort.
trait Term<'ctx>: Ast<'ctx> + Sized {
    fn constant(context: &'ctx z3::Context, name: String) -> Self;

    fn literal(context: &'ctx z3::Context, value: i64) -> Self;

    fn plus(&self, other: &Self) -> Self;

    fn times(&self, other: &Self) -> Self;

    fn is_positive(&self) -> Bool<'ctx>;

    /// The value of this term in the given model, as a signed 64-bit integer.
    fn read(&self, model: &z3::Model<'ctx>) -> Option<i64>;
}

impl<'ctx> Term<'ctx> for BV<'ctx> {
    fn constant(context: &'ctx z3::Context, name: String) -> Self {
        BV::new_const(context, name, BIT_WIDTH)
    }

    fn literal(context: &'ctx z3::Context, value: i64) -> Self {
        BV::from_i64(context, value, BIT_WIDTH)
    }

    fn plus(&self, other: &Self) -> Self {
        self.bvadd(other)
    }

    fn times(&self, other: &Self) -> Self {
        self.bvmul(other)
    }

    fn is_positive(&self) -> Bool<'ctx> {
        self.bvsgt(&BV::from_i64(self.get_ctx(), 0, BIT_WIDTH))
    }

    fn read(&self, model: &z3::Model<'ctx>) -> Option<i64> {
        // Bit-vector numerals are unsigned, reinterpret them as two's-complement.
        model.eval(self)?.as_u64().map(|value| value as i64)
    }
}

impl<'ctx> Term<'ctx> for Int<'ctx> {
    fn constant(context: &'ctx z3::Context, name: String) -> Self {
        Int::new_const(context, name)
    }

    fn literal(context: &'ctx z3::Context, value: i64) -> Self {
        Int::from_i64(context, value)
    }

    fn plus(&self, other: &Self) -> Self {
        Int::add(self.get_ctx(), &[self, other])
    }

    fn times(&self, other: &Self) -> Self {
        Int::mul(self.get_ctx(), &[self, other])
    }

    fn is_positive(&self) -> Bool<'ctx> {
        self.gt(&Int::from_i64(self.get_ctx(), 0))
    }

    fn read(&self, model: &z3::Model<'ctx>) -> Option<i64> {
        model.eval(self)?.as_i64()
    }
}

/// The unknowns of the throw and the collision times, expressed in one sort.
struct Encoding<'ctx, T: Term<'ctx>> {
    context: &'ctx z3::Context,
    position: [T; 3],
    velocity: [T; 3],
    times: Vec<T>,
}

impl<'ctx, T: Term<'ctx>> Encoding<'ctx, T> {
    fn new(context: &'ctx z3::Context) -> Self {
        Self {
            context,
            position: POSITION_NAMES.map(|name| T::constant(context, name.to_string())),
            velocity: VELOCITY_NAMES.map(|name| T::constant(context, name.to_string())),
            times: Vec::new(),
        }
    }

    /// Create the collision time for the given trajectory and return the assertions involving it.
    fn collision(&mut self, trajectory: &Trajectory) -> [Bool<'ctx>; 4] {
        let time = T::constant(self.context, time_name(self.times.len()));
        let meets = |axis: usize| {
            let throw = self.position[axis].plus(&self.velocity[axis].times(&time));
            let hail = T::literal(self.context, trajectory.position[axis])
                .plus(&T::literal(self.context, trajectory.velocity[axis]).times(&time));
            throw._eq(&hail)
        };
        let result = [time.is_positive(), meets(0), meets(1), meets(2)];
        self.times.push(time);
        result
    }

    fn distinct_times(&self) -> Option<Bool<'ctx>> {
        if self.times.len() < 2 {
            return None;
        }
        let times: Vec<&T> = self.times.iter().collect();
        Some(T::distinct(self.context, &times))
    }

    fn throw(&self, model: &z3::Model<'ctx>) -> Result<Throw, String> {
        let read = |term: &T, name: &str| term.read(model).ok_or_else(|| format!("No 64-bit value for {}", name));

        let mut trajectory = Trajectory::default();
        for axis in 0..3 {
            trajectory.position[axis] = read(&self.position[axis], POSITION_NAMES[axis])?;
            trajectory.velocity[axis] = read(&self.velocity[axis], VELOCITY_NAMES[axis])?;
        }

        let mut times = Vec::with_capacity(self.times.len());
        for (index, time) in self.times.iter().enumerate() {
            times.push(read(time, &time_name(index))?);
        }

        Ok(Throw { trajectory, times })
    }
}

enum Encodings<'ctx> {
    BitVector(Encoding<'ctx, BV<'ctx>>),
    Integer(Encoding<'ctx, Int<'ctx>>),
}

/// This solver uses Z3 to provide the required SMT solving features.
///
/// Uses [z3] as a backend.
/// The [Theory::BitVector] is encoded with 64-bit bit-vectors, the [Theory::Integer] with Z3's unbounded integers.
pub struct Z3Solver<'ctx> {
    solver: z3::Solver<'ctx>,
    encoding: Encodings<'ctx>,
}

impl<'ctx> Solver<'ctx> for Z3Solver<'ctx> {
    type Init = z3::Context;

    fn default_init() -> Self::Init {
        let mut config = z3::Config::new();
        config.set_model_generation(true);
        config.set_proof_generation(false);
        config.set_debug_ref_count(false);
        z3::Context::new(&config)
    }

    fn new(theory: Theory, context: &'ctx Self::Init) -> Self {
        let encoding = match theory {
            Theory::BitVector => Encodings::BitVector(Encoding::new(context)),
            Theory::Integer => Encodings::Integer(Encoding::new(context)),
        };

        Self {
            solver: z3::Solver::new(context),
            encoding,
        }
    }

    fn assert_collision(&mut self, trajectory: &Trajectory) {
        let assertions = match &mut self.encoding {
            Encodings::BitVector(encoding) => encoding.collision(trajectory),
            Encodings::Integer(encoding) => encoding.collision(trajectory),
        };
        for assertion in assertions.iter() {
            self.solver.assert(assertion);
        }
    }

    fn assert_distinct_times(&mut self) {
        let distinct = match &self.encoding {
            Encodings::BitVector(encoding) => encoding.distinct_times(),
            Encodings::Integer(encoding) => encoding.distinct_times(),
        };
        if let Some(distinct) = distinct {
            self.solver.assert(&distinct);
        }
    }

    fn check(&mut self) -> Verdict {
        match self.solver.check() {
            SatResult::Sat => Verdict::Satisfiable,
            SatResult::Unsat => Verdict::Unsatisfiable,
            SatResult::Unknown => Verdict::Unknown,
        }
    }

    fn throw(&self) -> Result<Throw, String> {
        let model = self.solver.get_model().ok_or("The solver did not provide a model")?;
        match &self.encoding {
            Encodings::BitVector(encoding) => encoding.throw(&model),
            Encodings::Integer(encoding) => encoding.throw(&model),
        }
    }
}

impl Display for Z3Solver<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.solver.fmt(f)
    }
}
