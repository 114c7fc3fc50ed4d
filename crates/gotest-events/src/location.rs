// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `file.go:line` references in test output

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Extension of the source files referenced by test output
pub const SOURCE_EXTENSION: &str = "go";

static LOCATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[a-zA-Z_]+\.{SOURCE_EXTENSION}:\d+")).expect("valid location regex")
});

/// A source location such as `foo_test.go:12`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocation {
    /// File name, without any directory
    pub file: String,
    /// 1-based line number
    pub line: usize,
}

impl FileLocation {
    /// Parse a token that is exactly `name.go:N`
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let (file, line) = token.rsplit_once(':')?;
        let line = line.parse().ok()?;
        Some(Self {
            file: file.to_string(),
            line,
        })
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// All `file:line` tokens in a line, in order of appearance
pub fn find_tokens(text: &str) -> impl Iterator<Item = &str> {
    LOCATION_REGEX.find_iter(text).map(|m| m.as_str())
}

/// The first location in a line, if any
#[must_use]
pub fn first_location(text: &str) -> Option<FileLocation> {
    find_tokens(text).find_map(FileLocation::parse)
}

/// The single `file:line` token in a line, or `None` if there are zero or several
#[must_use]
pub fn sole_token(text: &str) -> Option<&str> {
    let mut tokens = find_tokens(text);
    let first = tokens.next()?;
    tokens.next().is_none().then_some(first)
}

/// The location named by an assertion header line
///
/// Assertion libraries print `foo_test.go:12:` on a line of its own to say where
/// a check failed. Anything else on the line disqualifies it.
#[must_use]
pub fn assertion_header(line: &str) -> Option<FileLocation> {
    let token = sole_token(line)?;
    if line.trim() == format!("{token}:") {
        FileLocation::parse(token)
    } else {
        None
    }
}
