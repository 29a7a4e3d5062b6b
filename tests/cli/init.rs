use anyhow::Result;
use spring_cleaning::config::Config;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .springrc.json"));
    let config: Config = serde_json::from_str(&test.read_file(".springrc.json")?)?;
    assert!(config.jobs.contains_key("build_list_props"));

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".springrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".springrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}
