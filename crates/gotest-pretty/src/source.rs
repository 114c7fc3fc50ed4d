// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Source file lookup and snippet rendering
//!
//! Test output only names a file (`foo_test.go:12`), not where it lives. The
//! package import path usually ends with the directory the file is in, so the
//! locator tries the package path's suffixes as directories under the search
//! root, shortest-suffix first, then the root itself.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use thiserror::Error;

use crate::styles::Styles;

/// Lines shown on each side of the target line
const CONTEXT_LINES: usize = 2;

/// Snippet errors
///
/// Both are recovered by showing the bare file name instead of a snippet.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No candidate path could be read
    #[error("Source file not found: {file} (package {package})")]
    Unavailable {
        /// File name from the test output
        file: String,
        /// Package the file was searched for in
        package: String,
    },

    /// The context window does not fit inside the file
    #[error("Line {line} of {file} does not have two lines of context on each side")]
    SliceOutOfRange {
        /// File name from the test output
        file: String,
        /// Requested 1-based line
        line: usize,
    },
}

/// Read access to source files
pub trait SourceLoader {
    /// Read a file relative to the search root
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Loads source files from disk, relative to a root directory
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Create a loader rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The search root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }
}

/// In-memory sources keyed by relative path
impl SourceLoader for HashMap<PathBuf, String> {
    fn load(&self, path: &Path) -> io::Result<String> {
        self.get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Paths to try for `file` in `package`, in order
///
/// For `example.com/mod/pkg` and `foo_test.go` these are `pkg/foo_test.go`,
/// `mod/pkg/foo_test.go`, `example.com/mod/pkg/foo_test.go` and finally
/// `foo_test.go`.
#[must_use]
pub fn candidate_paths(package: &str, file: &str) -> Vec<PathBuf> {
    let segments: Vec<&str> = package.split('/').filter(|s| !s.is_empty()).collect();
    let mut paths: Vec<PathBuf> = (0..segments.len())
        .rev()
        .map(|i| segments[i..].iter().collect::<PathBuf>().join(file))
        .collect();
    paths.push(PathBuf::from(file));
    paths
}

/// Find and read `file` for `package`
///
/// # Errors
///
/// Returns `SourceError::Unavailable` if no candidate path can be read.
pub fn locate<L: SourceLoader + ?Sized>(
    loader: &L,
    package: &str,
    file: &str,
) -> Result<(PathBuf, String), SourceError> {
    candidate_paths(package, file)
        .into_iter()
        .find_map(|path| loader.load(&path).ok().map(|contents| (path, contents)))
        .ok_or_else(|| SourceError::Unavailable {
            file: file.to_string(),
            package: package.to_string(),
        })
}

/// Render the lines around `line` with the line itself marked
///
/// The result is a `file:line:` header followed by five numbered rows.
///
/// # Errors
///
/// Returns `SourceError::SliceOutOfRange` if the file does not have two lines on
/// each side of `line`.
pub fn render_snippet(
    styles: &Styles,
    file: &str,
    contents: &str,
    line: usize,
) -> Result<String, SourceError> {
    let lines: Vec<&str> = contents.split('\n').collect();
    let out_of_range = || SourceError::SliceOutOfRange {
        file: file.to_string(),
        line,
    };

    let first = line.checked_sub(CONTEXT_LINES).filter(|&n| n >= 1);
    let last = line
        .checked_add(CONTEXT_LINES)
        .filter(|&n| n <= lines.len());
    let (Some(first), Some(last)) = (first, last) else {
        return Err(out_of_range());
    };

    let width = last.to_string().len();
    let mut rows = vec![format!("{file}:{line}:")];
    for number in first..=last {
        let text = lines[number - 1].trim_end_matches('\r');
        let padded = format!("{number:>width$}");
        if number == line {
            rows.push(format!(" {} {padded} |{text}", ">".style(styles.failure)));
        } else {
            rows.push(format!(
                "   {} |{}",
                padded.style(styles.dim),
                text.style(styles.dim)
            ));
        }
    }
    Ok(rows.join("\n"))
}
