// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use nom::bytes::complete::tag;
use nom::combinator::all_consuming;
use nom::IResult;

use common::{Trajectory, Vector};

use super::{e2s, read_integer};

fn parse_vector(text: &str) -> IResult<&str, Vector> {
    let (text, x) = read_integer(text)?;
    let (text, _) = tag(",")(text)?;
    let (text, y) = read_integer(text)?;
    let (text, _) = tag(",")(text)?;
    let (text, z) = read_integer(text)?;
    Ok((text, [x, y, z]))
}

fn parse_trajectory(text: &str) -> IResult<&str, Trajectory> {
    let (text, position) = parse_vector(text)?;
    let (text, _) = tag("@")(text)?;
    let (text, velocity) = parse_vector(text)?;
    Ok((text, Trajectory::new(position, velocity)))
}

/// Parse a single line, which should contain exactly one trajectory.
pub(crate) fn parse_line(line: &str) -> Result<Trajectory, String> {
    all_consuming(parse_trajectory)(line).map(|(_, trajectory)| trajectory).map_err(e2s)
}

/// Parse all non-empty lines, keeping the order of the text.
pub(crate) fn parse(text: &str) -> Result<Vec<Trajectory>, String> {
    let mut result = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let trajectory = parse_line(line).map_err(|e| format!("Line {}: {}", index + 1, e))?;
        result.push(trajectory);
    }
    Ok(result)
}
