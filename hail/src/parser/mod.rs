// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::Debug;

use nom::bytes::complete::is_a;
use nom::character::complete::{digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::IResult;

pub(crate) mod trajectories;

fn e2s<T: Debug>(e: T) -> String {
    format!("{:?}", e)
}

fn skip_whitespace(input: &str) -> IResult<&str, Option<&str>> {
    opt(is_a(" \t\r"))(input)
}

/// Read a signed decimal integer surrounded by optional whitespace.
///
/// Integers outside the range of [i64] are rejected.
fn read_integer(input: &str) -> IResult<&str, i64> {
    let (input, _) = skip_whitespace(input)?;
    let (input, result) = map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| s.parse::<i64>())(input)?;
    let (input, _) = skip_whitespace(input)?;
    Ok((input, result))
}
