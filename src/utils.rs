//! Common utility functions shared across the codebase.

use std::path::Path;

/// Render `path` relative to `base` with `/` separators.
///
/// Falls back to the full path when `path` is not under `base`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ignref::utils::display_relative;
///
/// assert_eq!(display_relative(Path::new("docs/tags/udt.md"), Path::new("docs")), "tags/udt.md");
/// assert_eq!(display_relative(Path::new("other/a.md"), Path::new("docs")), "other/a.md");
/// ```
pub fn display_relative(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Pick the singular or plural form of a noun.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
