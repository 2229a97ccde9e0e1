use super::documents::Category;

pub const REPORT_FILE_NAME: &str = "EXTRACTION_REPORT.md";

/// Render the extraction summary.
///
/// `files` are paths relative to the output root.
pub fn render_report(files: &[String], timestamp: &str) -> String {
    let mut content = format!(
        "# Extraction Report\n\nGenerated: {}\n\n## Summary\n- Successfully extracted: {} components\n\n## Extracted Files\n",
        timestamp,
        files.len()
    );

    for file in files {
        content.push_str(&format!("- [OK] {}\n", file));
    }

    content.push_str(
        "
## Next Steps

1. Review extracted documentation
2. Run `ignref validate` on the documentation tree
3. Validate parameter configurations
4. Re-run `ignref extract` after changing the installation

## Documentation Status

| Component | Status | Files |
|-----------|--------|-------|
",
    );

    for category in Category::ALL {
        let path = category.relative_path();
        let status = if files.iter().any(|f| f == path) {
            "[OK] Complete"
        } else {
            "[!] Missing"
        };
        content.push_str(&format!(
            "| {} | {} | {} |\n",
            category.label(),
            status,
            path
        ));
    }

    content.push_str(
        "
## Documentation Links
- [Components Index](COMPONENTS_INDEX.md)
- [Main README](README.md)
",
    );

    content
}
