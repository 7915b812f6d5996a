// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use super::*;

fn validate_for(tool: Tool, args: &[&str]) -> Result<Arguments, String> {
    let help = HelpTexts::new();
    validate_args(get_app(tool, "", "", "", &help).get_matches_from_safe(args).map_err(|e| e.to_string())?)
}

fn validate(args: &[&str]) -> Result<Arguments, String> {
    validate_for(Tool::Solve, args)
}

#[test]
fn test_defaults() {
    let arguments = validate(&["exe"]).expect("Defaults should be valid");
    assert_eq!(arguments.input_path, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(arguments.settings, Settings::default());
    assert_eq!(arguments.throw, None);
    assert_eq!(arguments.area, Area::default());
}

#[test]
fn test_validate_prefix() {
    assert_eq!(validate(&["exe", "-p", "1"]).map(|a| a.settings.prefix), Ok(Some(1)));
    assert_eq!(validate(&["exe", "ignored", "--prefix", "300"]).map(|a| a.settings.prefix), Ok(Some(300)));
    assert_eq!(validate(&["exe", "ignored", "-a"]).map(|a| a.settings.prefix), Ok(None));
    assert!(validate(&["exe", "-p", "0"]).is_err());
    assert!(validate(&["exe", "-p", "-3"]).is_err());
    assert!(validate(&["exe", "-p", "a"]).is_err());
    assert!(validate(&["exe", "-p", " "]).is_err());
    assert!(validate(&["exe", "-p", "5", "--all"]).is_err());
}

#[test]
fn test_validate_theory() {
    assert_eq!(validate(&["exe", "-t", "int"]).map(|a| a.settings.theory), Ok(Theory::Integer));
    assert_eq!(validate(&["exe", "--theory", "bv"]).map(|a| a.settings.theory), Ok(Theory::BitVector));
    assert!(validate(&["exe", "-t", "real"]).is_err());
}

#[test]
fn test_validate_solve_flags() {
    let arguments = validate(&["exe", "inputs/example.txt", "-d"]).unwrap();
    assert_eq!(arguments.input_path, PathBuf::from("inputs/example.txt"));
    assert!(arguments.settings.dump_constraints);
}

#[test]
fn test_validate_throw() {
    let arguments = validate_for(Tool::Check, &["exe", "inputs/example.txt", "--throw", "24, 13, 10 @ -3, 1, 2"]).unwrap();
    assert_eq!(arguments.throw, Some(Trajectory::new([24, 13, 10], [-3, 1, 2])));
    assert_eq!(arguments.settings.prefix, Some(DEFAULT_PREFIX));

    let arguments = validate_for(Tool::Check, &["exe", "--all", "--throw", "-1, 0, 0 @ 1, 0, 0"]).unwrap();
    assert_eq!(arguments.throw, Some(Trajectory::new([-1, 0, 0], [1, 0, 0])));
    assert_eq!(arguments.settings.prefix, None);

    assert!(validate_for(Tool::Check, &["exe", "--throw", "24, 13, 10"]).is_err());
    assert!(validate_for(Tool::Check, &["exe"]).is_err());
}

#[test]
fn test_validate_area() {
    let arguments = validate_for(Tool::Crossings, &["exe", "--low", "7", "--high", "27"]).unwrap();
    assert_eq!(arguments.area, Area { low: 7, high: 27 });

    let arguments = validate_for(Tool::Crossings, &["exe", "--low", "-5"]).unwrap();
    assert_eq!(arguments.area, Area { low: -5, high: DEFAULT_AREA_HIGH });

    assert!(validate_for(Tool::Crossings, &["exe", "--low", "27", "--high", "7"]).is_err());
    assert!(validate_for(Tool::Crossings, &["exe", "--high", "1e14"]).is_err());
}

#[test]
fn test_reject_foreign_flags() {
    assert!(validate(&["exe", "--throw", "1, 2, 3 @ 4, 5, 6"]).is_err());
    assert!(validate(&["exe", "--low", "7"]).is_err());
    assert!(validate_for(Tool::Check, &["exe", "-d", "--throw", "1, 2, 3 @ 4, 5, 6"]).is_err());
    assert!(validate_for(Tool::Check, &["exe", "-t", "int", "--throw", "1, 2, 3 @ 4, 5, 6"]).is_err());
    assert!(validate_for(Tool::Crossings, &["exe", "-p", "5"]).is_err());
    assert!(validate_for(Tool::Crossings, &["exe", "-d"]).is_err());
}

#[test]
fn test_load_hailstorm() {
    let mut arguments = validate(&["exe"]).unwrap();
    arguments.input_path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../inputs/example.txt"));
    let (hailstorm, _) = load_hailstorm(arguments.clone()).expect("The example should load");
    assert_eq!(hailstorm.len(), 5);

    arguments.input_path = PathBuf::from("does/not/exist.txt");
    assert!(load_hailstorm(arguments).is_err());
}
