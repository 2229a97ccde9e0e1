use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "ignitionRoot",
        "outputRoot",
        "docsRoot",
        "expectedDirs",
        "criticalFiles",
        "skipFiles",
        "ignores",
        "runnerSource",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }

    assert_eq!(parsed["expectedDirs"].as_array().map(Vec::len), Some(13));
    assert_eq!(parsed["runnerSource"], "extract_components.md");

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .ignrefrc.json"));
    assert!(test.root().join(".ignrefrc.json").exists());

    let content = test.read_file(".ignrefrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".ignrefrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".ignrefrc.json already exists"));
    assert_eq!(test.read_file(".ignrefrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.conformant_docs()?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    assert!(
        output.status.success(),
        "Validate should work with initialized config. stdout: {}",
        stdout(&output)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".ignrefrc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    let output = test.validate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}
