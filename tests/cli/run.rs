use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const SCRIPT: &str = "# Component Extractor

```python
import os

class ComponentExtractor:
    def __init__(self, root):
        self.root = root
```

Run it:

```python
extractor = ComponentExtractor(os.getcwd())
```
";

#[test]
fn test_run_parses_then_extracts() -> Result<()> {
    let test = CliTest::with_file("extract_components.md", SCRIPT)?;

    let output = test
        .run_command()
        .args(["--ignition-root", "missing", "--output-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("Found 2 python blocks in extract_components.md"));
    assert!(out.contains("Program parses"));
    assert!(out.contains("Extraction complete - 4 documents written"));
    assert!(test.root().join("docs/EXTRACTION_REPORT.md").exists());

    Ok(())
}

#[test]
fn test_run_emits_program() -> Result<()> {
    let test = CliTest::with_file("scripts/extract.md", SCRIPT)?;

    let output = test
        .run_command()
        .args(["--source", "scripts/extract.md", "--emit", "build/program.py"])
        .args(["--ignition-root", "missing", "--output-root", "docs"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote program to build/program.py"));

    let program = test.read_file("build/program.py")?;
    assert!(program.starts_with("import os\n"));
    assert!(program.ends_with("extractor = ComponentExtractor(os.getcwd())\n"));

    Ok(())
}

#[test]
fn test_run_syntax_error_reports_block() -> Result<()> {
    let test = CliTest::with_file(
        "extract_components.md",
        "# Broken\n\n```python\nimport os\n```\n\n```python\nroot = os.getcwd()\nif root\n    print(root)\n```\n",
    )?;

    let output = test
        .run_command()
        .args(["--ignition-root", "missing", "--output-root", "docs"])
        .output()?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1), "{}", out);
    assert!(out.contains("error: "));
    assert!(out.contains("= note: python block 2, line"));
    assert!(out.contains("extraction not started"));
    assert!(!test.root().join("docs").exists());

    Ok(())
}

#[test]
fn test_run_without_python_blocks() -> Result<()> {
    let test = CliTest::with_file("extract_components.md", "# Notes\n\nNothing to run.\n")?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No Python code blocks found in extract_components.md"));

    Ok(())
}

#[test]
fn test_run_missing_source_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read extract_components.md"));

    Ok(())
}
