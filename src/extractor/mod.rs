//! Category document generation from an Ignition installation tree.
//!
//! The extractor scans `<root>/data/projects`, gathers a [`SourceInventory`],
//! writes one markdown document per [`Category`] under the output root and
//! finishes with an extraction report. A missing installation only means all
//! counts are zero; the documents are still written.

pub mod documents;
pub mod report;
pub mod scan;
mod templates;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};

pub use documents::{Category, SourceInventory};
pub use scan::{COMPONENT_CATEGORIES, ComponentCount, Project};

use crate::utils::display_relative;

/// A category document written to disk.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub category: Category,
    pub path: PathBuf,
    /// Path relative to the output root, `/`-separated.
    pub relative_path: String,
    pub detail: Option<String>,
}

/// Everything one extraction run produced.
#[derive(Debug)]
pub struct ExtractionSummary {
    pub root: PathBuf,
    pub root_found: bool,
    /// `None` when the projects directory does not exist.
    pub projects: Option<Vec<Project>>,
    pub documents: Vec<ExtractedDocument>,
    pub report_path: PathBuf,
}

pub struct Extractor {
    root: PathBuf,
    output_root: PathBuf,
    extracted: Vec<PathBuf>,
}

impl Extractor {
    pub fn new(root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_root: output_root.into(),
            extracted: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Paths written so far, in write order.
    pub fn extracted(&self) -> &[PathBuf] {
        &self.extracted
    }

    pub fn scan_projects(&self) -> Result<Option<Vec<Project>>> {
        scan::scan_projects(&self.root)
    }

    pub fn extract_gateway_scripts(
        &mut self,
        inventory: &SourceInventory,
    ) -> Result<ExtractedDocument> {
        self.extract(Category::GatewayScripts, inventory)
    }

    pub fn extract_device_connections(
        &mut self,
        inventory: &SourceInventory,
    ) -> Result<ExtractedDocument> {
        self.extract(Category::DeviceConnections, inventory)
    }

    pub fn extract_transaction_groups(
        &mut self,
        inventory: &SourceInventory,
    ) -> Result<ExtractedDocument> {
        self.extract(Category::TransactionGroups, inventory)
    }

    pub fn extract_alarm_profiles(
        &mut self,
        inventory: &SourceInventory,
    ) -> Result<ExtractedDocument> {
        self.extract(Category::AlarmProfiles, inventory)
    }

    /// Render `category` and overwrite its document.
    pub fn extract(
        &mut self,
        category: Category,
        inventory: &SourceInventory,
    ) -> Result<ExtractedDocument> {
        let path = self.output_root.join(category.relative_path());
        write_file(&path, &documents::render(category, inventory))?;
        self.extracted.push(path.clone());

        Ok(ExtractedDocument {
            category,
            relative_path: display_relative(&path, &self.output_root),
            path,
            detail: documents::detail(category, inventory),
        })
    }

    /// Write the extraction report stamped with the current local time.
    pub fn generate_report(&self) -> Result<PathBuf> {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        self.generate_report_at(&timestamp)
    }

    pub fn generate_report_at(&self, timestamp: &str) -> Result<PathBuf> {
        let files: Vec<String> = self
            .extracted
            .iter()
            .map(|path| display_relative(path, &self.output_root))
            .collect();

        let path = self.output_root.join(report::REPORT_FILE_NAME);
        write_file(&path, &report::render_report(&files, timestamp))?;
        Ok(path)
    }

    /// Scan, write every category document, then the report.
    pub fn run_extraction(mut self) -> Result<ExtractionSummary> {
        let root_found = self.root_exists();
        let projects = self.scan_projects()?;
        let inventory =
            SourceInventory::collect(&self.root, projects.as_deref().unwrap_or_default())?;

        let documents = vec![
            self.extract_gateway_scripts(&inventory)?,
            self.extract_device_connections(&inventory)?,
            self.extract_transaction_groups(&inventory)?,
            self.extract_alarm_profiles(&inventory)?,
        ];

        let report_path = self.generate_report()?;

        Ok(ExtractionSummary {
            root: self.root,
            root_found,
            projects,
            documents,
            report_path,
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
