//! Documentation tree validation.
//!
//! [`DocumentationValidator`] walks every markdown file under a root, counts
//! `params` and `python` blocks, syntax-checks each `python` block and records
//! problems as [`Issue`]s. A file or directory that cannot be read is recorded
//! and skipped; it never aborts the rest of the scan. A missing root yields no
//! files, since the structure check already reports it.

pub mod structure;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

pub use structure::{PresenceCheck, check_critical_files, check_repository_structure};

use crate::issues::{Issue, MissingLinksIssue, ReadErrorIssue, SyntaxErrorIssue};
use crate::markdown::{has_links_section, is_meta_documentation, params_blocks, python_blocks};
use crate::python;
use crate::utils::display_relative;

/// Counters accumulated over one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationStats {
    /// Markdown files validated (skipped meta files excluded).
    pub total_files: usize,
    /// Files excluded by the skip list.
    pub skipped_files: usize,
    /// Files read successfully whose `python` blocks all parse.
    pub valid_files: usize,
    pub files_with_params: usize,
    pub files_with_code: usize,
    /// `python` blocks that passed the syntax check.
    pub executable_blocks: usize,
}

impl ValidationStats {
    /// Percentage of valid files, `None` when nothing was validated.
    pub fn validity_rate(&self) -> Option<f64> {
        (self.total_files > 0).then(|| self.valid_files as f64 / self.total_files as f64 * 100.0)
    }
}

/// Per-file result, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    pub valid: bool,
}

/// Final state of a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub stats: ValidationStats,
    pub issues: Vec<Issue>,
    pub files: Vec<FileOutcome>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}

pub struct DocumentationValidator {
    root: PathBuf,
    skip_files: Vec<String>,
    ignores: Vec<Pattern>,
    report: ValidationReport,
}

impl DocumentationValidator {
    pub fn new(
        root: impl Into<PathBuf>,
        skip_files: Vec<String>,
        ignores: &[String],
    ) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.into(),
            skip_files,
            ignores,
            report: ValidationReport::default(),
        })
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.report.stats
    }

    pub fn issues(&self) -> &[Issue] {
        &self.report.issues
    }

    /// All `*.md` files under the root, sorted, minus ignored paths.
    ///
    /// Skip-listed files are included; [`Self::validate_all`] counts them.
    /// Entries the walk cannot read are recorded as read errors.
    pub fn markdown_files(&mut self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if !self.root.is_dir() {
            return files;
        }

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(&self.root);
                    self.report.issues.push(Issue::ReadError(ReadErrorIssue {
                        file_path: display_relative(path, &self.root),
                        error: err.to_string(),
                    }));
                    continue;
                }
            };
            let path = entry.path();

            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative = display_relative(path, &self.root);
            if self.ignores.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files
    }

    /// Validate every markdown file and hand back the accumulated report.
    pub fn validate_all(mut self) -> ValidationReport {
        for path in self.markdown_files() {
            if self.is_skipped(&path) {
                self.report.stats.skipped_files += 1;
                continue;
            }
            self.validate_file(&path);
        }

        self.report
    }

    fn is_skipped(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.skip_files.iter().any(|skip| *skip == name))
    }

    /// Validate one file. A read failure becomes an error issue for that file.
    pub fn validate_file(&mut self, path: &Path) {
        let relative = display_relative(path, &self.root);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.report.stats.total_files += 1;

        match fs::read_to_string(path) {
            Ok(content) => {
                let valid = self.validate_content(&relative, &file_name, &content);
                if valid {
                    self.report.stats.valid_files += 1;
                }
                self.report.files.push(FileOutcome {
                    path: relative,
                    valid,
                });
            }
            Err(err) => {
                self.report.issues.push(Issue::ReadError(ReadErrorIssue {
                    file_path: relative.clone(),
                    error: err.to_string(),
                }));
                self.report.files.push(FileOutcome {
                    path: relative,
                    valid: false,
                });
            }
        }
    }

    /// Check the text of one document. Returns true if every `python` block parses.
    fn validate_content(&mut self, relative: &str, file_name: &str, content: &str) -> bool {
        let stats = &mut self.report.stats;

        if !params_blocks(content).is_empty() {
            stats.files_with_params += 1;
        }

        let mut valid = true;
        let blocks = python_blocks(content);
        if !blocks.is_empty() {
            stats.files_with_code += 1;

            for block in &blocks {
                match python::check(&block.content) {
                    None => stats.executable_blocks += 1,
                    Some(error) => {
                        valid = false;
                        self.report
                            .issues
                            .push(Issue::SyntaxError(SyntaxErrorIssue {
                                file_path: relative.to_string(),
                                block: block.index,
                                line: error.line,
                                col: error.col,
                                file_line: block.start_line + error.line - 1,
                                source_line: block.line(error.line).unwrap_or_default().to_string(),
                                message: error.message,
                            }));
                    }
                }
            }
        }

        if !has_links_section(content) && !is_meta_documentation(file_name) {
            self.report
                .issues
                .push(Issue::MissingLinks(MissingLinksIssue {
                    file_path: relative.to_string(),
                }));
        }

        valid
    }
}

fn is_markdown_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("md"))
}
