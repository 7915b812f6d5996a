// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The arithmetic used when encoding and checking the collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theory {
    /// Fixed-width 64-bit signed integers with two's-complement wraparound.
    BitVector,

    /// Unbounded integers.
    Integer,
}

impl Theory {
    /// The names accepted by [Theory::from_str].
    pub const NAMES: [&'static str; 2] = ["bv", "int"];

    /// The short name of this theory.
    pub fn name(self) -> &'static str {
        match self {
            Theory::BitVector => Self::NAMES[0],
            Theory::Integer => Self::NAMES[1],
        }
    }
}

impl Default for Theory {
    fn default() -> Self {
        Theory::BitVector
    }
}

impl FromStr for Theory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bv" => Ok(Theory::BitVector),
            "int" => Ok(Theory::Integer),
            _ => Err(format!("Unknown theory '{}', expected one of: {}", s, Self::NAMES.join(", "))),
        }
    }
}

impl Display for Theory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod theory_tests {
    use super::Theory;

    #[test]
    fn test_names() {
        for name in Theory::NAMES {
            assert_eq!(name.parse::<Theory>().map(Theory::name), Ok(name));
        }
        assert!("BV".parse::<Theory>().is_err());
        assert!("".parse::<Theory>().is_err());
        assert_eq!(Theory::default(), Theory::BitVector);
    }
}
