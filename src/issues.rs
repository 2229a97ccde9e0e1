//! Issue types for documentation validation results.
//!
//! Each issue is self-contained with everything the reporter needs to display
//! it: the file it belongs to, a message, and an optional source location.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ReadError,
    SyntaxError,
    MissingLinks,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ReadError => write!(f, "read-error"),
            Rule::SyntaxError => write!(f, "syntax-error"),
            Rule::MissingLinks => write!(f, "missing-links"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Markdown file that could not be read (permissions, invalid UTF-8, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

/// A `python` block that failed the syntax check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorIssue {
    pub file_path: String,
    /// 1-based index of the block within the file.
    pub block: usize,
    /// 1-based line within the block.
    pub line: usize,
    /// 1-based character column within the line.
    pub col: usize,
    /// 1-based line within the markdown file.
    pub file_line: usize,
    /// The offending line, for context display.
    pub source_line: String,
    pub message: String,
}

impl SyntaxErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::SyntaxError
    }
}

/// File without a "Documentation Links" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLinksIssue {
    pub file_path: String,
}

impl MissingLinksIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingLinks
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while validating a documentation tree.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ReadError(ReadErrorIssue),
    SyntaxError(SyntaxErrorIssue),
    MissingLinks(MissingLinksIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ReadError(_) => ReadErrorIssue::severity(),
            Issue::SyntaxError(_) => SyntaxErrorIssue::severity(),
            Issue::MissingLinks(_) => MissingLinksIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ReadError(_) => ReadErrorIssue::rule(),
            Issue::SyntaxError(_) => SyntaxErrorIssue::rule(),
            Issue::MissingLinks(_) => MissingLinksIssue::rule(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::ReadError(issue) => &issue.file_path,
            Issue::SyntaxError(issue) => &issue.file_path,
            Issue::MissingLinks(issue) => &issue.file_path,
        }
    }
}

/// One-line rendering used in plain lists, e.g.
/// `scripting/gateway.md Block 2: Syntax error at line 3: invalid syntax`.
impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::ReadError(issue) => write!(f, "{}: {}", issue.file_path, issue.error),
            Issue::SyntaxError(issue) => write!(
                f,
                "{} Block {}: Syntax error at line {}: {}",
                issue.file_path, issue.block, issue.line, issue.message
            ),
            Issue::MissingLinks(issue) => write!(
                f,
                "{}: Missing documentation links section",
                issue.file_path
            ),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Position inside the markdown file, with the offending line.
    Source {
        path: &'a str,
        line: usize,
        col: usize,
        source_line: &'a str,
    },
    /// File-level only.
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by every issue type; `enum_dispatch` forwards calls on `Issue`
/// without a vtable.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for SyntaxErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            path: &self.file_path,
            line: self.file_line,
            col: self.col,
            source_line: &self.source_line,
        }
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("python block {}, line {}", self.block, self.line))
    }
}

impl Report for MissingLinksIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        "missing documentation links section".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add a \"## Documentation Links\" heading")
    }
}
