use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, EN_DOCUMENT};

#[test]
fn test_status_table() -> Result<()> {
    let test = CliTest::with_file("en.json", EN_DOCUMENT)?;

    assert_cmd_snapshot!(test.status_command().arg("en.json"));

    Ok(())
}

#[test]
fn test_status_below_threshold_fails() -> Result<()> {
    let test = CliTest::with_file("en.json", EN_DOCUMENT)?;

    assert_cmd_snapshot!(
        test.status_command()
            .args(["en.json", "--min-completeness", "0.5"])
    );

    Ok(())
}

#[test]
fn test_status_threshold_from_config() -> Result<()> {
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;
    test.write_file(".phrasekitrc.json", r#"{ "minCompleteness": 1.0 }"#)?;

    assert_cmd_snapshot!(test.status_command().arg("values"));

    Ok(())
}

#[test]
fn test_status_skips_ignored_directories() -> Result<()> {
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;
    test.write_file("values/drafts/de.json", "not json")?;
    test.write_file(".phrasekitrc.json", r#"{ "ignores": ["**/drafts/**"] }"#)?;

    assert_cmd_snapshot!(test.status_command().arg("values"));

    Ok(())
}

#[test]
fn test_status_absolute_path() -> Result<()> {
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;
    let values_dir = test.root().join("values");

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.status_command().arg(&values_dir));
    });

    Ok(())
}

#[test]
fn test_status_rejects_invalid_config() -> Result<()> {
    let test = CliTest::with_file("en.json", EN_DOCUMENT)?;
    test.write_file(".phrasekitrc.json", r#"{ "minCompleteness": 2.0 }"#)?;

    assert_cmd_snapshot!(test.status_command().arg("en.json"));

    Ok(())
}
