use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const DOCUMENTS: [&str; 4] = [
    "scripting/gateway_scripts.md",
    "devices/device_connections.md",
    "database/transaction_groups.md",
    "alarms/alarm_notification_profiles.md",
];

#[test]
fn test_extract_without_installation() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["--ignition-root", "missing", "--output-root", "docs"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Ignition not found at: missing"));
    assert!(stderr(&output).contains("warning: Projects directory not found"));

    for document in DOCUMENTS {
        let content = test.read_file(&format!("docs/{}", document))?;
        assert!(content.contains("Documentation Links"), "{}", document);
        assert!(stdout(&output).contains(&format!("Created: {}", document)));
    }

    let gateway = test.read_file("docs/scripting/gateway_scripts.md")?;
    assert!(gateway.contains("No gateway scripts found."));

    let report = test.read_file("docs/EXTRACTION_REPORT.md")?;
    assert!(report.contains("- Successfully extracted: 4 components"));
    assert!(stdout(&output).contains("Extraction complete - 4 documents written"));

    Ok(())
}

#[test]
fn test_extract_counts_gateway_scripts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "ignition/data/projects/plant/ignition/gateway-scripts/timer/poll.json",
        "{}",
    )?;
    test.write_file(
        "ignition/data/projects/plant/ignition/gateway-scripts/timer/purge.json",
        "{}",
    )?;
    test.write_file(
        "ignition/data/projects/plant/ignition/gateway-scripts/startup/init.json",
        "{}",
    )?;
    test.write_file(
        "ignition/data/projects/plant/ignition/tags/line1.json",
        "{}",
    )?;
    test.create_dir("ignition/data/projects/empty")?;

    let output = test
        .extract_command()
        .args(["--ignition-root", "ignition", "--output-root", "docs"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Found project: empty"));
    assert!(out.contains("! No ignition directory in empty"));
    assert!(out.contains("Found project: plant"));
    assert!(out.contains("  - Tag Configurations: 1 file\n"));
    assert!(out.contains("Created: scripting/gateway_scripts.md (3 scripts documented)"));

    let gateway = test.read_file("docs/scripting/gateway_scripts.md")?;
    assert!(gateway.contains("Found 3 gateway scripts across the following types:"));
    assert!(gateway.contains("- startup: 1 script\n"));
    assert!(gateway.contains("- timer: 2 scripts\n"));

    Ok(())
}

#[test]
fn test_extract_reads_ignition_root_from_env() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("installation/data/projects")?;

    let output = test
        .extract_command()
        .env("IGNITION_ROOT", "installation")
        .args(["--output-root", "docs"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Ignition found: installation"));
    assert!(stdout(&output).contains("No projects found"));

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "ignition/data/projects/plant/ignition/gateway-scripts/timer/poll.json",
        "{}",
    )?;

    let args = ["--ignition-root", "ignition", "--output-root", "docs"];
    test.extract_command().args(args).output()?;
    let first: Vec<String> = DOCUMENTS
        .iter()
        .map(|d| test.read_file(&format!("docs/{}", d)))
        .collect::<Result<_>>()?;

    test.extract_command().args(args).output()?;
    let second: Vec<String> = DOCUMENTS
        .iter()
        .map(|d| test.read_file(&format!("docs/{}", d)))
        .collect::<Result<_>>()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_extracted_documents_validate_cleanly() -> Result<()> {
    let test = CliTest::new()?;
    test.extract_command()
        .args(["--ignition-root", "missing", "--output-root", "docs"])
        .output()?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert!(out.contains("Validation passed (0 errors, 0 warnings)"), "{}", out);
    assert!(out.contains("Files with code:     4"), "{}", out);

    Ok(())
}
