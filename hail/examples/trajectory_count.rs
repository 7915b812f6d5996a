// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

fn main() -> Result<(), String> {
    let path = std::env::args().nth(1).unwrap_or_else(|| common::DEFAULT_INPUT.to_string());
    let hailstorm = hail::parse_file(path)?;
    println!("Trajectory count: {}", hailstorm.len());
    Ok(())
}
