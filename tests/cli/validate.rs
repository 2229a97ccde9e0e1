use std::fs;

use anyhow::Result;

use crate::{CRITICAL_FILES, CliTest, EXPECTED_DIRS, stdout};

#[test]
fn test_conformant_tree_passes() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("All expected directories present"));
    assert!(out.contains("All critical files present"));
    assert!(out.contains("Validity rate:       100.0%"));
    assert!(out.contains("Documentation is ready to publish"));

    Ok(())
}

#[test]
fn test_missing_directory_is_listed() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;
    fs::remove_dir(test.root().join("docs/webdev"))?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("\u{2718} webdev/ (missing)"));
    assert!(out.contains("1 directory missing"));
    assert_eq!(out.matches("(missing)").count(), 1);
    assert!(out.contains("Some issues need attention before publishing"));

    Ok(())
}

#[test]
fn test_missing_docs_root_lists_everything_missing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .validate_command()
        .args(["--docs-root", "nope"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1), "{}", out);
    for dir in EXPECTED_DIRS {
        assert!(out.contains(&format!("\u{2718} {}/ (missing)", dir)), "{}", out);
    }
    for file in CRITICAL_FILES {
        assert!(out.contains(&format!("\u{2718} {} (missing)", file)), "{}", out);
    }
    assert!(out.contains("13 directories missing"));
    assert!(out.contains("6 critical files missing"));
    assert!(out.contains("Validating 0 markdown files"));
    assert!(out.contains("Some issues need attention before publishing"));

    Ok(())
}

#[test]
fn test_code_that_does_not_compile_fails_validation() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;
    test.write_file(
        "docs/scripting/outside.md",
        "# Outside\n\n```python\nresult = None\n```\n\n```python\nfor tag in tags:\n    pass\nreturn result\n```\n\n## Documentation Links\n",
    )?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1), "{}", out);
    assert_eq!(out.matches("error: ").count(), 1, "{}", out);
    assert!(out.contains("'return' outside function"), "{}", out);
    assert!(out.contains("  --> scripting/outside.md:10:1"), "{}", out);
    assert!(out.contains("= note: python block 2, line 3"), "{}", out);

    Ok(())
}

#[test]
fn test_syntax_error_names_block_and_line() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;
    test.write_file(
        "docs/scripting/broken.md",
        "# Broken\n\n```python\nx = 1\n```\n\n```python\na = 1\nb = 2\ndef broken(:\n    pass\n```\n\n## Documentation Links\n",
    )?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(out.matches("error: ").count(), 1, "{}", out);
    assert!(out.contains("  --> scripting/broken.md:10:"));
    assert!(out.contains("= note: python block 2, line 3"));
    assert!(out.contains("\u{2718} scripting/broken.md"));
    assert!(out.contains("Validation failed (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_missing_links_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;
    test.write_file("docs/vision/windows.md", "# Windows\n\nNo code here.\n")?;

    let output = test
        .validate_command()
        .args(["--docs-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("warning: missing documentation links section"));
    assert!(out.contains("Validation passed (0 errors, 1 warning)"));
    assert!(out.contains("Files with code:     1"));

    Ok(())
}

#[test]
fn test_skip_files_and_ignores_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.conformant_docs()?;
    test.write_file(
        ".ignrefrc.json",
        r#"{
  "docsRoot": "docs",
  "ignores": ["drafts/**"]
}"#,
    )?;
    test.write_file("docs/README_GITHUB.md", "```python\ndef (\n```\n")?;
    test.write_file("docs/drafts/wip.md", "```python\ndef (\n```\n")?;

    let output = test.validate_command().output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("Skipped files:       1"));
    assert!(!out.contains("wip.md"));

    Ok(())
}
