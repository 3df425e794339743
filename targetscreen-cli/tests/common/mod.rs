#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use targetscreen_test::{
    assert_screening_table, metadata_csv, TestEnvironment, PERFECT_REPEAT,
};

/// Helper to run the targetscreen binary with logging kept quiet
pub fn targetscreen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("targetscreen").unwrap();
    cmd.env_remove("RUST_LOG").env("TARGETSCREEN_LOG", "warn");
    cmd
}

/// One well-formed comparison of two identical repeats
pub fn self_match_metadata() -> String {
    metadata_csv(&[(1, "ref", PERFECT_REPEAT), (1, "inp", PERFECT_REPEAT)])
}

/// Path of one direction's table under a batch output root
pub fn table_path(out: &Path, pair: &str, input: &str, reference: &str) -> PathBuf {
    out.join(pair)
        .join(format!("input_{}_refseq_{}.csv", input, reference))
}

/// Run `batch` over `metadata` with windows [18, 21) and return the output root
pub fn run_batch(env: &TestEnvironment, metadata: &str) -> PathBuf {
    let input = env.create_input_file("meta.csv", metadata).unwrap();
    let out = env.outputs_dir().join("screen2");

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--seq-low", "18", "--seq-high", "21", "-q"])
        .assert()
        .success();

    out
}
