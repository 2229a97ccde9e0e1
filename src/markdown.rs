//! Fenced code block extraction for the markdown convention used by the
//! documentation tree: ```` ```params ```` blocks hold informal key:value hints,
//! ```` ```python ```` blocks hold snippets that must parse.

use regex::Regex;
use std::sync::LazyLock;

/// Heading text every document is expected to carry.
pub const LINKS_MARKER: &str = "Documentation Links";

// Capture group 1: block body. The fence tag must be followed directly by a
// newline, so ```python3 or ```python title="x" are not picked up.
static PYTHON_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```python\r?\n(.*?)\r?\n```").unwrap());

static PARAMS_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```params\r?\n(.*?)\r?\n```").unwrap());

/// A fenced block pulled out of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// 1-based position among blocks with the same tag.
    pub index: usize,
    /// 1-based line of the first body line within the document.
    pub start_line: usize,
    pub content: String,
}

impl FencedBlock {
    /// Number of lines in the body (an empty body still occupies one line).
    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }

    /// Body line by 1-based number.
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.content.lines().nth(idx))
    }
}

/// Extract all ```` ```python ```` blocks in document order.
pub fn python_blocks(content: &str) -> Vec<FencedBlock> {
    extract_blocks(&PYTHON_BLOCK_REGEX, content)
}

/// Extract all ```` ```params ```` blocks in document order.
pub fn params_blocks(content: &str) -> Vec<FencedBlock> {
    extract_blocks(&PARAMS_BLOCK_REGEX, content)
}

fn extract_blocks(regex: &Regex, content: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut line = 1;
    let mut scanned = 0;

    for captures in regex.captures_iter(content) {
        let Some(body) = captures.get(1) else {
            continue;
        };

        line += content[scanned..body.start()].matches('\n').count();
        scanned = body.start();

        blocks.push(FencedBlock {
            index: blocks.len() + 1,
            start_line: line,
            content: body.as_str().to_string(),
        });
    }

    blocks
}

/// Join block bodies in document order, one newline between blocks.
pub fn concat_blocks(blocks: &[FencedBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map a 1-based line of [`concat_blocks`] output back to `(block index, line within block)`.
pub fn locate_in_blocks(blocks: &[FencedBlock], line: usize) -> Option<(usize, usize)> {
    if line == 0 {
        return None;
    }
    let mut first = 1;
    for block in blocks {
        let count = block.line_count();
        if line < first + count {
            return Some((block.index, line - first + 1));
        }
        first += count;
    }
    None
}

pub fn has_links_section(content: &str) -> bool {
    content.contains(LINKS_MARKER)
}

/// Files whose name mentions "documentation" are about the docs themselves
/// and do not need a links section.
pub fn is_meta_documentation(file_name: &str) -> bool {
    file_name.to_lowercase().contains("documentation")
}
