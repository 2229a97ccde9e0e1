//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; command summaries as short
//! progress listings. Kept apart from the extractor and validator so both can
//! be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, RunSummary, ValidateSummary};
use crate::extractor::ExtractionSummary;
use crate::extractor::scan::projects_dir;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::pluralize;
use crate::validator::{PresenceCheck, ValidationReport, ValidationStats};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Extract(summary) => print_extraction_to(summary, stdout),
        CommandSummary::Validate(summary) => print_validation_to(summary, stdout),
        CommandSummary::Run(summary) => print_run_to(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Issues
// ============================================================

/// Print issues in cargo-style format to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);
    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::Source {
            path,
            line,
            col,
            source_line,
        } => {
            let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);
            print_source_context(
                writer,
                line,
                col,
                source_line,
                issue.report_severity(),
                max_line_width,
            );
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_source_context<W: Write>(
    writer: &mut W,
    line: usize,
    col: usize,
    source_line: &str,
    severity: Severity,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source { line, .. } => Some(line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

// ============================================================
// Extract
// ============================================================

pub fn print_extraction_to<W: Write>(summary: &ExtractionSummary, writer: &mut W) {
    if summary.root_found {
        let _ = writeln!(
            writer,
            "{} Ignition found: {}",
            SUCCESS_MARK.green(),
            summary.root.display()
        );
    } else {
        print_warning(&format!(
            "Ignition not found at: {} (continuing with template generation)",
            summary.root.display()
        ));
    }

    let _ = writeln!(writer, "\n{}", "Scanning projects".bold());
    match &summary.projects {
        None => print_warning(&format!(
            "Projects directory not found: {}",
            projects_dir(&summary.root).display()
        )),
        Some(projects) if projects.is_empty() => {
            let _ = writeln!(writer, "  No projects found");
        }
        Some(projects) => {
            for project in projects {
                let _ = writeln!(
                    writer,
                    "{} Found project: {}",
                    SUCCESS_MARK.green(),
                    project.name
                );
                if !project.has_ignition_dir {
                    let _ = writeln!(writer, "  ! No ignition directory in {}", project.name);
                }
                for component in &project.components {
                    let _ = writeln!(
                        writer,
                        "  - {}: {} {}",
                        component.label,
                        component.files,
                        pluralize(component.files, "file", "files")
                    );
                }
            }
        }
    }

    let _ = writeln!(writer, "\n{}", "Writing documents".bold());
    for document in &summary.documents {
        let detail = document
            .detail
            .as_ref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "{} Created: {}{}",
            SUCCESS_MARK.green(),
            document.relative_path,
            detail
        );
    }
    let _ = writeln!(
        writer,
        "{} Report generated: {}",
        SUCCESS_MARK.green(),
        summary.report_path.display()
    );

    let count = summary.documents.len();
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extraction complete - {} {} written",
            count,
            pluralize(count, "document", "documents")
        )
        .green()
    );
}

// ============================================================
// Validate
// ============================================================

pub fn print_validation_to<W: Write>(summary: &ValidateSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Checking repository structure".bold());
    print_presence(&summary.structure, "/", writer);
    if summary.structure.is_ok() {
        print_ok_line(writer, "All expected directories present");
    } else {
        let missing = summary.structure.missing.len();
        print_failure_line(
            writer,
            &format!(
                "{} {} missing",
                missing,
                pluralize(missing, "directory", "directories")
            ),
        );
    }

    let _ = writeln!(writer, "\n{}", "Checking critical files".bold());
    print_presence(&summary.critical_files, "", writer);
    if summary.critical_files.is_ok() {
        print_ok_line(writer, "All critical files present");
    } else {
        let missing = summary.critical_files.missing.len();
        print_failure_line(
            writer,
            &format!(
                "{} critical {} missing",
                missing,
                pluralize(missing, "file", "files")
            ),
        );
    }

    print_documents(&summary.docs, writer);

    let _ = writeln!(writer);
    if summary.passed() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Documentation is ready to publish".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Some issues need attention before publishing".red()
        );
    }
}

fn print_presence<W: Write>(check: &PresenceCheck, suffix: &str, writer: &mut W) {
    for name in &check.present {
        let _ = writeln!(writer, "  {} {}{}", SUCCESS_MARK.green(), name, suffix);
    }
    for name in &check.missing {
        let _ = writeln!(
            writer,
            "  {} {}{} {}",
            FAILURE_MARK.red(),
            name,
            suffix,
            "(missing)".red()
        );
    }
}

fn print_ok_line<W: Write>(writer: &mut W, message: &str) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_failure_line<W: Write>(writer: &mut W, message: &str) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

fn print_documents<W: Write>(report: &ValidationReport, writer: &mut W) {
    let count = report.files.len();
    let _ = writeln!(
        writer,
        "\n{}",
        format!(
            "Validating {} markdown {}",
            count,
            pluralize(count, "file", "files")
        )
        .bold()
    );
    for file in &report.files {
        let mark = if file.valid {
            SUCCESS_MARK.green()
        } else {
            FAILURE_MARK.red()
        };
        let _ = writeln!(writer, "  {} {}", mark, file.path);
    }
    let _ = writeln!(writer);

    report_to(&report.issues, writer);
    print_stats(&report.stats, writer);

    let errors = report.error_count();
    let warnings = report.issues.len() - errors;
    let counts = format!(
        "{} {}, {} {}",
        errors,
        pluralize(errors, "error", "errors"),
        warnings,
        pluralize(warnings, "warning", "warnings")
    );
    if report.passed() {
        print_ok_line(writer, &format!("Validation passed ({})", counts));
    } else {
        print_failure_line(writer, &format!("Validation failed ({})", counts));
    }
}

fn print_stats<W: Write>(stats: &ValidationStats, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Statistics".bold());
    let rows = [
        ("Total files", stats.total_files),
        ("Skipped files", stats.skipped_files),
        ("Valid files", stats.valid_files),
        ("Files with params", stats.files_with_params),
        ("Files with code", stats.files_with_code),
        ("Executable blocks", stats.executable_blocks),
    ];
    for (label, value) in rows {
        let _ = writeln!(writer, "  {:<20} {}", format!("{}:", label), value);
    }
    if let Some(rate) = stats.validity_rate() {
        let _ = writeln!(writer, "  {:<20} {:.1}%", "Validity rate:", rate);
    }
    let _ = writeln!(writer);
}

// ============================================================
// Run
// ============================================================

pub fn print_run_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let source = summary.source.display();

    if summary.block_count == 0 {
        let _ = writeln!(writer, "No Python code blocks found in {}", source);
        return;
    }

    let _ = writeln!(
        writer,
        "Found {} python {} in {}",
        summary.block_count,
        pluralize(summary.block_count, "block", "blocks"),
        source
    );

    if let Some(error) = &summary.syntax_error {
        let _ = writeln!(writer);
        report_to(&[Issue::SyntaxError(error.clone())], writer);
        print_failure_line(writer, "Program does not parse; extraction not started");
        return;
    }

    print_ok_line(writer, "Program parses");
    if let Some(path) = &summary.emitted {
        let _ = writeln!(
            writer,
            "{} Wrote program to {}",
            SUCCESS_MARK.green(),
            path.display()
        );
    }

    if let Some(extraction) = &summary.extraction {
        let _ = writeln!(writer);
        print_extraction_to(extraction, writer);
    }
}

// ============================================================
// Init
// ============================================================

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            summary.path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{MissingLinksIssue, SyntaxErrorIssue};

    fn render(issues: &[Issue]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        report_to(issues, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_syntax_error_with_caret() {
        let issue = Issue::SyntaxError(SyntaxErrorIssue {
            file_path: "tags/udt.md".to_string(),
            block: 1,
            line: 2,
            col: 12,
            file_line: 14,
            source_line: "def broken(:".to_string(),
            message: "invalid syntax".to_string(),
        });

        let output = render(&[issue]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "error: invalid syntax  syntax-error");
        assert_eq!(lines[1], "  --> tags/udt.md:14:12");
        assert_eq!(lines[3], "14 | def broken(:");
        assert_eq!(lines[4], "   |            ^");
        assert_eq!(lines[5], "   = note: python block 1, line 2");
    }

    #[test]
    fn test_file_level_warning() {
        let issue = Issue::MissingLinks(MissingLinksIssue {
            file_path: "vision/windows.md".to_string(),
        });

        let output = render(&[issue]);
        assert!(output.starts_with("warning: missing documentation links section  missing-links\n"));
        assert!(output.contains("  --> vision/windows.md\n"));
        assert!(output.contains("= hint: add a \"## Documentation Links\" heading"));
    }

    #[test]
    fn test_empty_issue_list_prints_nothing() {
        assert_eq!(render(&[]), "");
    }
}
