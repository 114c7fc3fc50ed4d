// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering of a failed test's output
//!
//! Assertion headers (`foo_test.go:12:`) are replaced by a snippet of the source
//! around that line. A runtime panic switches to panic mode: the snippet for the
//! first frame inside the test's package is shown above the panic message, and the
//! rest of the trace is dimmed except for frames from that package.

use std::io::{self, Write};

use gotest_events::location::{self, FileLocation};
use gotest_events::result::TestResult;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::source::{SourceLoader, locate, render_snippet};
use crate::styles::Styles;

const PANIC_PREFIX: &str = "panic: runtime error: ";
const EXPECTED_MARKER: &str = "expected:";
const ACTUAL_MARKER: &str = "actual  :";

/// Renders failure output, resolving source snippets through a [`SourceLoader`]
pub struct SnippetResolver<'a, L: ?Sized> {
    loader: &'a L,
    styles: &'a Styles,
}

impl<'a, L: SourceLoader + ?Sized> SnippetResolver<'a, L> {
    /// Create a resolver
    #[must_use]
    pub fn new(loader: &'a L, styles: &'a Styles) -> Self {
        Self { loader, styles }
    }

    /// The rendered snippet for a location, or just the file name if the source
    /// cannot be shown
    #[must_use]
    pub fn snippet(&self, package: &str, location: &FileLocation) -> String {
        let rendered = locate(self.loader, package, &location.file).and_then(|(path, contents)| {
            debug!(path = %path.display(), "source file found");
            render_snippet(self.styles, &location.file, &contents, location.line)
        });
        match rendered {
            Ok(snippet) => snippet,
            Err(err) => {
                debug!(%err, "showing file name instead of snippet");
                location.file.clone()
            }
        }
    }

    /// Write a test's retained output
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_output<W: Write + ?Sized>(
        &self,
        out: &mut W,
        test: &TestResult,
    ) -> io::Result<()> {
        let mut panic_mode = false;

        for line in &test.output_lines {
            let text = line.trim_end_matches('\n');

            if panic_mode {
                if text.contains(&test.package) && !text.starts_with("FAIL\t") {
                    writeln!(out, "{text}")?;
                } else {
                    writeln!(out, "{}", text.style(self.styles.dim))?;
                }
                continue;
            }

            if let Some(message) = text.strip_prefix(PANIC_PREFIX) {
                if let Some(location) = panic_location(test) {
                    self.write_snippet(out, &test.package, &location)?;
                }
                writeln!(out, "{}{message}", PANIC_PREFIX.style(self.styles.failure))?;
                panic_mode = true;
                continue;
            }

            if let Some(location) = location::assertion_header(text) {
                self.write_snippet(out, &test.package, &location)?;
                continue;
            }

            writeln!(out, "{}", self.highlight(text))?;
        }

        Ok(())
    }

    fn write_snippet<W: Write + ?Sized>(
        &self,
        out: &mut W,
        package: &str,
        location: &FileLocation,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.snippet(package, location))?;
        writeln!(out)
    }

    fn highlight(&self, text: &str) -> String {
        let expected = EXPECTED_MARKER.style(self.styles.success).to_string();
        let actual = ACTUAL_MARKER.style(self.styles.failure).to_string();
        text.replacen(EXPECTED_MARKER, &expected, 1)
            .replacen(ACTUAL_MARKER, &actual, 1)
    }
}

/// The first location on a retained line that mentions the test's package
fn panic_location(test: &TestResult) -> Option<FileLocation> {
    test.output_lines
        .iter()
        .filter(|line| line.contains(&test.package))
        .find_map(|line| location::first_location(line))
}
