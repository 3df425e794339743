mod common;

use anyhow::Result;
use predicates::prelude::*;
use std::fs;

use common::*;

#[test]
fn test_missing_metadata_file() -> Result<()> {
    let env = TestEnvironment::new()?;

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(env.inputs_dir().join("absent.csv"))
        .arg("-o")
        .arg(env.outputs_dir())
        .arg("-q")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Error: Failed to read metadata"));
    Ok(())
}

#[test]
fn test_missing_column_fails_before_screening() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("meta.csv", "Comparison #,Region\n1,ref\n1,inp\n")?;
    let out = env.outputs_dir().join("screen2");

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Missing required column: Sequence"));

    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_threshold_out_of_range() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("meta.csv", &self_match_metadata())?;

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(&input)
        .args(["-t", "1.5", "-q"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("threshold"));
    Ok(())
}

#[test]
fn test_invalid_symbol_in_sequence() -> Result<()> {
    let env = TestEnvironment::new()?;
    let metadata = metadata_csv(&[(1, "ref", PERFECT_REPEAT), (1, "inp", "ACGTACGTJACGTACGTACGT")]);
    let input = env.create_input_file("meta.csv", &metadata)?;

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(env.outputs_dir().join("screen2"))
        .arg("-q")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid symbol 'J' at position 8"));
    Ok(())
}

#[test]
fn test_malformed_config_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = env.create_input_file("bad.toml", "[window\nmin_length = ")?;

    targetscreen_cmd()
        .arg("config")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_screen_requires_reference() {
    targetscreen_cmd()
        .arg("screen")
        .args(["-i", PERFECT_REPEAT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reference"));
}

#[test]
fn test_empty_metadata_succeeds_without_tables() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("meta.csv", "Comparison #,Region,Sequence\n")?;
    let out = env.outputs_dir().join("screen2");

    targetscreen_cmd()
        .arg("batch")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    assert!(out.exists());
    assert_eq!(fs::read_dir(&out)?.count(), 0);
    Ok(())
}
