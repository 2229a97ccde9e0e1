use std::path::Path;

/// Present/absent split for a list of expected entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceCheck {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl PresenceCheck {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    fn from_predicate(names: &[String], exists: impl Fn(&str) -> bool) -> Self {
        let (present, missing) = names.iter().cloned().partition(|name| exists(name));
        Self { present, missing }
    }
}

/// Check that every expected top-level directory exists under `root`.
pub fn check_repository_structure(root: &Path, expected_dirs: &[String]) -> PresenceCheck {
    PresenceCheck::from_predicate(expected_dirs, |name| root.join(name).is_dir())
}

/// Check that every critical file exists at `root`.
pub fn check_critical_files(root: &Path, critical_files: &[String]) -> PresenceCheck {
    PresenceCheck::from_predicate(critical_files, |name| root.join(name).is_file())
}
