#![allow(dead_code)]

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Four vertices, cheapest route to 3 is 0 -> 2 -> 1 -> 3 with cost 4
pub const SMALL_GRAPH: &str = "4\n0 1 4\n0 2 1\n2 1 2\n1 3 1\n";

pub const WORDS: &str = "cat cot cog dog dot\n";

/// Get a Command for pathladder, isolated from any user-level config
pub fn pathladder() -> Command {
    let mut cmd = cargo_bin_cmd!("pathladder");
    cmd.env_remove("PATHLADDER_CONFIG").env(
        "PATHLADDER_CONFIG_DIR",
        std::env::temp_dir().join("pathladder-tests-no-config"),
    );
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
