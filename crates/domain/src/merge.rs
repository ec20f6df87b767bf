//! Concatenation of E2E exports into one clean dataset.
//!
//! Every export starts with zero or more banner lines followed by one header
//! line. Both are dropped from each file, the first one included, and the
//! remaining lines are kept verbatim in file order.

/// Marker that starts every banner line of an export.
pub const BANNER: &str = "**********  FOR OFFICIAL USE ONLY  **********";

/// Ordered data lines assembled from one or more exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedDataset {
    lines: Vec<String>,
    files: usize,
}

impl MergedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the data lines of one export, returning how many were retained.
    pub fn append_file(&mut self, content: &str) -> usize {
        let before = self.lines.len();
        self.lines.extend(data_lines(content).map(str::to_owned));
        self.files += 1;
        self.lines.len() - before
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn file_count(&self) -> usize {
        self.files
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendition: every retained line followed by `\n`.
    pub fn to_text(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Lines of `content` split on `\n`. A `\r` before the `\n` stays part of the
/// line so that CRLF rows are reproduced byte for byte.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split_inclusive('\n')
        .map(|line| line.strip_suffix('\n').unwrap_or(line))
}

/// Data lines of one export: leading banner lines and the single header line
/// that follows them are skipped.
pub fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut lines = split_lines(content).peekable();
    while lines.next_if(|line| line.starts_with(BANNER)).is_some() {}
    // header
    lines.next();
    lines
}
