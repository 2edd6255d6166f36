mod common;

use anyhow::Result;
use predicates::prelude::*;
use std::fs;

use common::*;

#[test]
fn test_unknown_report_is_usage_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("brands.csv", &ratings_csv(&[("Foo", "4.0")]))?;

    env.cmd()
        .arg("--files")
        .arg(&input)
        .args(["--report", "median-price"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("median-price"))
        .stderr(predicate::str::contains("average-rating"));

    Ok(())
}

#[test]
fn test_unknown_report_checked_before_file_access() -> Result<()> {
    let env = TestEnvironment::new()?;
    let missing = env.input_dir.join("does-not-exist.csv");

    // A missing file would exit 3; usage errors win because no file is opened
    env.cmd()
        .arg("--files")
        .arg(&missing)
        .args(["--report", "nope"])
        .assert()
        .code(2);

    Ok(())
}

#[test]
fn test_missing_arguments() {
    let env = TestEnvironment::new().unwrap();

    env.cmd()
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--files"));

    env.cmd()
        .args(["--files", "a.csv"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--report"));
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let good = env.create_input_file("good.csv", &ratings_csv(&[("Foo", "4.0")]))?;
    let missing = env.input_dir.join("missing.csv");

    env.cmd()
        .arg("--files")
        .arg(&good)
        .arg(&missing)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("missing.csv"));

    Ok(())
}

#[test]
fn test_non_numeric_rating() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file(
        "bad.csv",
        &ratings_csv(&[("Foo", "4.0"), ("Bar", "excellent")]),
    )?;

    env.cmd()
        .arg("--files")
        .arg(&input)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed record #2"))
        .stderr(predicate::str::contains("bad.csv:3"))
        .stderr(predicate::str::contains("'excellent' is not a number"));

    Ok(())
}

#[test]
fn test_missing_brand_column() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("nobrand.csv", "name,rating\nwidget,4.0\n")?;

    env.cmd()
        .arg("--files")
        .arg(&input)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("missing field 'brand'"));

    Ok(())
}

#[test]
fn test_invalid_utf8_input() -> Result<()> {
    let env = TestEnvironment::new()?;
    let path = env.input_dir.join("latin1.csv");
    fs::write(&path, b"brand,rating\nCaf\xe9,4.0\n")?;

    env.cmd()
        .arg("--files")
        .arg(&path)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("latin1.csv"));

    Ok(())
}

#[test]
fn test_missing_explicit_config() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("brands.csv", &ratings_csv(&[("Foo", "4.0")]))?;

    env.cmd()
        .arg("--config")
        .arg(env.temp_dir.path().join("absent.toml"))
        .arg("--files")
        .arg(&input)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));

    Ok(())
}

#[test]
fn test_no_panic_on_garbage() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("garbage.csv", "\"unterminated,quote\n,,,\n")?;

    let assert = env
        .cmd()
        .arg("--files")
        .arg(&input)
        .args(["--report", "average-rating"])
        .assert();
    assert.code(predicate::ne(101)); // Not a panic exit code

    Ok(())
}

#[test]
fn test_malformed_record_line_in_crlf_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = env.create_input_file("crlf.csv", "brand,rating\r\nFoo,4.0\r\n\r\nBar,x\r\n")?;

    env.cmd()
        .arg("--files")
        .arg(&input)
        .args(["--report", "average-rating"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("crlf.csv:4"));

    Ok(())
}
