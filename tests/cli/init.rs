use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, EN_DOCUMENT};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["format"], "android-xml");
    assert!(parsed["pluralDefault"].is_null());
    assert!(parsed["ignores"].is_array());
    assert_eq!(parsed["minCompleteness"], 0.0);

    assert!(
        content.contains("\n  \"format\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".phrasekitrc.json").exists());

    let content = test.read_file(".phrasekitrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".phrasekitrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".phrasekitrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;

    test.command().arg("init").output()?;

    let output = test.status_command().arg("values").output()?;
    assert!(
        output.status.success(),
        "Status command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
