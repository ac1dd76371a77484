use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, EN_DOCUMENT};

const DE_DOCUMENT: &str = r#"{
  "title": { "class": "StringArray", "values": ["Titel"] },
  "songs": { "class": "Plurals", "values": { "other": "%d Lieder" } }
}"#;

#[test]
fn test_render_android_xml() -> Result<()> {
    let test = CliTest::with_file("res/en.json", EN_DOCUMENT)?;

    assert_cmd_snapshot!(test.render_command().arg("res/en.json"));

    Ok(())
}

#[test]
fn test_render_plaintext_skips_string_arrays() -> Result<()> {
    let test = CliTest::with_file("en.json", EN_DOCUMENT)?;

    assert_cmd_snapshot!(test.render_command().args(["en.json", "--format", "plaintext"]));

    Ok(())
}

#[test]
fn test_render_uses_config_defaults() -> Result<()> {
    let test = CliTest::with_file("en.json", EN_DOCUMENT)?;
    test.write_file(
        ".phrasekitrc.json",
        r#"{ "format": "json", "pluralDefault": "%d things" }"#,
    )?;

    assert_cmd_snapshot!(test.render_command().arg("en.json"));

    Ok(())
}

#[test]
fn test_render_merges_documents_by_key() -> Result<()> {
    // de.json is read before en.json, so en.json's "songs" wins and keeps
    // the position it first had.
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;
    test.write_file("values/de.json", DE_DOCUMENT)?;

    assert_cmd_snapshot!(test.render_command().arg("values"));

    Ok(())
}

#[test]
fn test_render_to_output_file() -> Result<()> {
    let test = CliTest::with_file("values/en.json", EN_DOCUMENT)?;
    test.write_file("values/de.json", DE_DOCUMENT)?;

    assert_cmd_snapshot!(test.render_command().args(["values", "-o", "strings.xml"]));

    let written = test.read_file("strings.xml")?;
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n"));
    assert_eq!(written.matches("name=\"songs\"").count(), 1);

    Ok(())
}

#[test]
fn test_render_invalid_payload_is_an_error() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"songs": {"class": "Plurals"}}"#)?;

    assert_cmd_snapshot!(test.render_command().arg("en.json"));

    Ok(())
}

#[test]
fn test_render_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.render_command().arg("missing"));

    Ok(())
}
