// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a basic cli for Hailstorm.
//!
//! Every binary states its [Tool], and only the arguments that tool reads are accepted.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::path::PathBuf;

pub use clap::crate_version;
use clap::{App, Arg, ArgMatches};
use common::{Theory, Trajectory, DEFAULT_AREA_HIGH, DEFAULT_AREA_LOW, DEFAULT_INPUT, DEFAULT_PREFIX, MIN_PREFIX};
use hail::crossings::Area;
use hail::{parse_file, parse_trajectory, Hailstorm, Settings};

const INPUT_FILE_ARG: &str = "input_file";
const PREFIX_ARG: &str = "prefix";
const ALL_ARG: &str = "all";
const THEORY_ARG: &str = "theory";
const DUMP_ARG: &str = "dump";
const THROW_ARG: &str = "throw";
const LOW_ARG: &str = "low";
const HIGH_ARG: &str = "high";
const EXAMPLE_PREFIX: &str = "examples/";
const BIN_PREFIX: &str = "src/bin/";
const RUST_EXT: &str = ".rs";

/// The binary the command line is parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Solve for the throw: input, prefix, theory and dump.
    Solve,

    /// Check a given throw: input, prefix and the required throw.
    Check,

    /// Count crossing paths: input and the test area.
    Crossings,
}

/// The validated command line arguments.
///
/// Fields the [Tool] does not read keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// The file with the trajectories.
    pub input_path: PathBuf,

    /// The settings for the constraint solver driver.
    pub settings: Settings,

    /// The throw to check, if one was provided.
    pub throw: Option<Trajectory>,

    /// The test area for crossing paths.
    pub area: Area,
}

/// The help texts that need formatting, kept alive for the lifetime of the [App].
struct HelpTexts {
    prefix: String,
    low: String,
    high: String,
}

impl HelpTexts {
    fn new() -> Self {
        Self {
            prefix: format!("Set the number of leading trajectories to use [default: {}].", DEFAULT_PREFIX),
            low: format!("Set the lower bound of the test area [default: {}].", DEFAULT_AREA_LOW),
            high: format!("Set the upper bound of the test area [default: {}].", DEFAULT_AREA_HIGH),
        }
    }
}

fn get_app<'a, 'b>(tool: Tool, app_name: &'a str, short_version: &'a str, long_version: &'a str, help: &'a HelpTexts) -> App<'a, 'b>
where
    'a: 'b,
{
    let mut app = App::new(app_name)
        .version(short_version)
        .long_version(long_version)
        .arg(
            Arg::with_name(INPUT_FILE_ARG)
                .required(false)
                .default_value(DEFAULT_INPUT)
                .help("Set the input file with one trajectory per line."),
        );

    if tool != Tool::Crossings {
        app = app
            .arg(
                Arg::with_name(PREFIX_ARG)
                    .short("p")
                    .long("prefix")
                    .takes_value(true)
                    .help(help.prefix.as_str()),
            )
            .arg(
                Arg::with_name(ALL_ARG)
                    .short("a")
                    .long("all")
                    .conflicts_with(PREFIX_ARG)
                    .help("Use all trajectories instead of a prefix."),
            );
    }

    match tool {
        Tool::Solve => app
            .arg(
                Arg::with_name(THEORY_ARG)
                    .short("t")
                    .long("theory")
                    .takes_value(true)
                    .possible_values(&Theory::NAMES)
                    .default_value(Theory::BitVector.name())
                    .help("Set the arithmetic: 64-bit bit-vectors (bv) or unbounded integers (int)."),
            )
            .arg(
                Arg::with_name(DUMP_ARG)
                    .short("d")
                    .long("dump")
                    .help("Print the constraint system to stderr before solving."),
            ),
        Tool::Check => app.arg(
            Arg::with_name(THROW_ARG)
                .long("throw")
                .takes_value(true)
                .required(true)
                .allow_hyphen_values(true)
                .help("Set the throw to check, in the layout of the input file."),
        ),
        Tool::Crossings => app
            .arg(
                Arg::with_name(LOW_ARG)
                    .long("low")
                    .takes_value(true)
                    .allow_hyphen_values(true)
                    .help(help.low.as_str()),
            )
            .arg(
                Arg::with_name(HIGH_ARG)
                    .long("high")
                    .takes_value(true)
                    .allow_hyphen_values(true)
                    .help(help.high.as_str()),
            ),
    }
}

fn read_bound(matches: &ArgMatches, name: &str, default: i64) -> Result<i64, String> {
    match matches.value_of(name) {
        Some(value) => value.parse::<i64>().map_err(|_| format!("The {} argument should be a 64-bit number.", name)),
        None => Ok(default),
    }
}

fn validate_args(matches: ArgMatches) -> Result<Arguments, String> {
    let input_path = PathBuf::from(
        matches
            .value_of(INPUT_FILE_ARG)
            .ok_or("The input file should be provided")?,
    );

    let prefix = if matches.is_present(ALL_ARG) {
        None
    } else {
        let prefix = match matches.value_of(PREFIX_ARG) {
            Some(prefix) => prefix.parse::<usize>().map_err(|_| "The prefix argument should be a number.".to_string())?,
            None => DEFAULT_PREFIX,
        };
        if prefix < MIN_PREFIX {
            return Err(format!("Please provide a prefix of at least {}.", MIN_PREFIX));
        }
        Some(prefix)
    };

    let theory = match matches.value_of(THEORY_ARG) {
        Some(theory) => theory.parse::<Theory>()?,
        None => Theory::default(),
    };

    let throw = match matches.value_of(THROW_ARG) {
        Some(text) => Some(parse_trajectory(text).map_err(|e| format!("The throw could not be parsed: {}", e))?),
        None => None,
    };

    let area = Area {
        low: read_bound(&matches, LOW_ARG, DEFAULT_AREA_LOW)?,
        high: read_bound(&matches, HIGH_ARG, DEFAULT_AREA_HIGH)?,
    };
    if area.low > area.high {
        return Err(format!("The test area is empty: {} > {}.", area.low, area.high));
    }

    Ok(Arguments {
        input_path,
        settings: Settings { prefix, theory, dump_constraints: matches.is_present(DUMP_ARG) },
        throw,
        area,
    })
}

fn load_hailstorm(args: Arguments) -> Result<(Hailstorm, Arguments), String> {
    let hailstorm = parse_file(&args.input_path)?;
    if hailstorm.is_empty() {
        return Err(format!("{}: no trajectories found", args.input_path.display()));
    }
    Ok((hailstorm, args))
}

/// Parse the commandline arguments of the given [Tool] and return the [Hailstorm] they point to together with the
/// [Arguments].
pub fn parse_arguments(tool: Tool, mut app_name: &str, version: &str) -> Result<(Hailstorm, Arguments), String> {
    if app_name.ends_with(RUST_EXT) {
        app_name = &app_name[..app_name.len() - RUST_EXT.len()];
    }

    if app_name.starts_with(EXAMPLE_PREFIX) {
        app_name = &app_name[EXAMPLE_PREFIX.len()..];
    } else if app_name.starts_with(BIN_PREFIX) {
        app_name = &app_name[BIN_PREFIX.len()..];
    }

    let short_version = format!("v{} ({})", version, env!("GIT_HASH_SHORT"));
    let long_version = format!("v{} ({})", version, env!("GIT_HASH"));
    let help = HelpTexts::new();

    let matches = get_app(tool, app_name, short_version.as_str(), long_version.as_str(), &help).get_matches();

    load_hailstorm(validate_args(matches)?)
}

#[cfg(test)]
mod test_lib;
