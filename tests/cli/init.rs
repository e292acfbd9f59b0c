use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn init_creates_the_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let status = test.command().arg("init").status()?;
    assert_eq!(status.code(), Some(0));

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".propexrc.json")?)?;
    assert_eq!(config["environments"][0], "ref");

    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".propexrc.json", "{}")?;

    let status = test.command().arg("init").status()?;
    assert_eq!(status.code(), Some(2));

    // Existing file untouched.
    assert_eq!(test.read_file(".propexrc.json")?, "{}");

    Ok(())
}

#[test]
fn no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("extract"));

    Ok(())
}
