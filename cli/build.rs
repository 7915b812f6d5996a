// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::env::var;
use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn git_hash(dir: &Path, short: bool) -> Option<String> {
    let mut args = vec!["rev-parse"];
    if short {
        args.push("--short");
    }
    args.push("HEAD");
    let output = Command::new("git").args(&args).current_dir(dir).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}

fn main() {
    let dir = var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let dir = Path::new(&dir);

    let short = git_hash(dir, true).unwrap_or_else(|| UNKNOWN.into());
    let long = git_hash(dir, false).unwrap_or_else(|| UNKNOWN.into());
    println!("cargo:rustc-env=GIT_HASH_SHORT={}", short);
    println!("cargo:rustc-env=GIT_HASH={}", long);

    if let Some(parent) = dir.parent() {
        let head = parent.join(".git").join("HEAD");
        if head.exists() {
            println!("cargo:rerun-if-changed={}", head.display());
        }
    }
}
