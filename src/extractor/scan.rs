use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Asset category folders found under `<project>/ignition/`, with their labels.
pub const COMPONENT_CATEGORIES: &[(&str, &str)] = &[
    ("gateway-scripts", "Gateway Scripts"),
    ("named-query", "Named Queries"),
    ("perspective", "Perspective Resources"),
    ("vision", "Vision Resources"),
    ("reports", "Report Templates"),
    ("webdev", "WebDev Resources"),
    ("script-library", "Script Library"),
    ("tags", "Tag Configurations"),
    ("images", "Image Resources"),
];

/// File count for one category folder of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCount {
    pub folder: &'static str,
    pub label: &'static str,
    pub files: usize,
}

/// A project directory under `<root>/data/projects`.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    /// False when the project has no `ignition` directory.
    pub has_ignition_dir: bool,
    /// Categories holding at least one file.
    pub components: Vec<ComponentCount>,
}

impl Project {
    pub fn ignition_dir(&self) -> PathBuf {
        self.path.join("ignition")
    }
}

pub fn projects_dir(root: &Path) -> PathBuf {
    root.join("data").join("projects")
}

/// Scan all projects of an installation.
///
/// Returns `Ok(None)` when the projects directory does not exist, so callers
/// can warn and keep going.
pub fn scan_projects(root: &Path) -> Result<Option<Vec<Project>>> {
    let projects_dir = projects_dir(root);
    if !projects_dir.is_dir() {
        return Ok(None);
    }

    let mut projects = Vec::new();
    for (name, path) in list_subdirectories(&projects_dir)? {
        let ignition_dir = path.join("ignition");
        let has_ignition_dir = ignition_dir.is_dir();
        let components = if has_ignition_dir {
            scan_project_components(&ignition_dir)
        } else {
            Vec::new()
        };

        projects.push(Project {
            name,
            path,
            has_ignition_dir,
            components,
        });
    }

    Ok(Some(projects))
}

/// Count files recursively under each known category folder.
pub fn scan_project_components(ignition_dir: &Path) -> Vec<ComponentCount> {
    COMPONENT_CATEGORIES
        .iter()
        .filter_map(|&(folder, label)| {
            let comp_path = ignition_dir.join(folder);
            if !comp_path.is_dir() {
                return None;
            }
            let files = count_files(&comp_path);
            (files > 0).then_some(ComponentCount {
                folder,
                label,
                files,
            })
        })
        .collect()
}

/// Recursive count of regular files. Unreadable entries are not counted.
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}

/// Immediate subdirectories of `dir` as `(name, path)`, sorted by name.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    subdirs.sort();

    Ok(subdirs)
}
