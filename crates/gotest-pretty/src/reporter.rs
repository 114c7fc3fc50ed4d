// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Live and final report rendering
//!
//! While events arrive the reporter prints one tag line per top-level test
//! (` RUN `, then ` PASS `/` FAIL `/` SKIP ` with a line per sub-test). At the end
//! of the stream it walks the registry in start order, prints the output of every
//! failed test and a one-line summary.

use std::io::{self, Write};

use gotest_events::registry::{Registry, RunSummary, Transition};
use gotest_events::result::{TestId, TestResult, TestStatus};
use owo_colors::{OwoColorize, Style};

use crate::resolver::SnippetResolver;
use crate::source::SourceLoader;
use crate::styles::Styles;

/// Rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Leave ` RUN ` lines open and overwrite them with the result
    ///
    /// Only sensible when stdout is a terminal.
    pub overwrite_run_line: bool,
    /// Append elapsed time to result lines
    pub show_elapsed: bool,
}

/// Writes the report for one run
pub struct Reporter<'a, W> {
    out: W,
    styles: &'a Styles,
    options: ReportOptions,
    /// Test whose ` RUN ` line was written without a newline
    open_run_line: Option<TestId>,
}

impl<'a, W: Write> Reporter<'a, W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W, styles: &'a Styles, options: ReportOptions) -> Self {
        Self {
            out,
            styles,
            options,
            open_run_line: None,
        }
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a line that was not a test event
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn passthrough(&mut self, line: &str) -> io::Result<()> {
        self.close_run_line()?;
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    /// Render the effect of one applied event
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn transition(&mut self, registry: &Registry, transition: &Transition) -> io::Result<()> {
        match transition {
            Transition::Started(id) => self.started(*id, registry.get(*id)),
            Transition::Finished(id) => self.finished(*id, registry),
            Transition::Unclassified(output) => {
                self.close_run_line()?;
                writeln!(
                    self.out,
                    "{}",
                    output.trim_end_matches('\n').style(self.styles.dim)
                )?;
                self.out.flush()
            }
            Transition::SubtestStarted(_)
            | Transition::SubtestFinished(_)
            | Transition::Retained(_)
            | Transition::Dropped(..)
            | Transition::Ignored => Ok(()),
        }
    }

    fn started(&mut self, id: TestId, test: &TestResult) -> io::Result<()> {
        self.close_run_line()?;
        write!(
            self.out,
            "{} {} {}",
            " RUN ".style(self.styles.run_tag),
            test.package.style(self.styles.dim),
            test.name
        )?;
        if self.options.overwrite_run_line {
            self.open_run_line = Some(id);
        } else {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn finished(&mut self, id: TestId, registry: &Registry) -> io::Result<()> {
        if self.open_run_line == Some(id) {
            write!(self.out, "\r")?;
            self.open_run_line = None;
        } else {
            self.close_run_line()?;
        }

        let test = registry.get(id);
        write!(
            self.out,
            "{} {} {}",
            self.tag(test.status),
            test.package.style(self.styles.dim),
            test.name
        )?;
        if self.options.show_elapsed {
            if let Some(elapsed) = test.elapsed_display() {
                write!(self.out, " {}", format!("({elapsed})").style(self.styles.dim))?;
            }
        }
        writeln!(self.out)?;
        self.children(registry, test)?;
        self.out.flush()
    }

    fn children(&mut self, registry: &Registry, test: &TestResult) -> io::Result<()> {
        for child in registry.children(test) {
            let (glyph, style) = self.glyph(child.status);
            writeln!(
                self.out,
                "\t{} {}",
                glyph.style(style),
                child.name_under(&test.name).style(self.styles.dim)
            )?;
        }
        Ok(())
    }

    fn tag(&self, status: TestStatus) -> String {
        match status {
            TestStatus::Passed => " PASS ".style(self.styles.pass_tag).to_string(),
            TestStatus::Failed => " FAIL ".style(self.styles.fail_tag).to_string(),
            TestStatus::Skipped => " SKIP ".style(self.styles.skip_tag).to_string(),
            TestStatus::Running => " RUN ".style(self.styles.run_tag).to_string(),
        }
    }

    fn glyph(&self, status: TestStatus) -> (&'static str, Style) {
        match status {
            TestStatus::Passed => ("✓", self.styles.success),
            TestStatus::Skipped => ("-", self.styles.skipped),
            TestStatus::Failed | TestStatus::Running => ("✕", self.styles.failure),
        }
    }

    fn close_run_line(&mut self) -> io::Result<()> {
        if self.open_run_line.take().is_some() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Print the failure details and the summary line
    ///
    /// Failed top-level tests are listed in the order they started, each with its
    /// sub-test lines and rendered output, followed by the output of its failed
    /// sub-tests.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn finish<L: SourceLoader + ?Sized>(
        &mut self,
        registry: &Registry,
        resolver: &SnippetResolver<'_, L>,
    ) -> io::Result<RunSummary> {
        self.close_run_line()?;

        for test in registry.top_level().filter(|t| t.failed()) {
            self.failure_header(test)?;
            self.children(registry, test)?;
            if !test.output_lines.is_empty() {
                resolver.render_output(&mut self.out, test)?;
            }

            for child in registry
                .children(test)
                .filter(|c| c.failed() && !c.output_lines.is_empty())
            {
                self.failure_header(child)?;
                resolver.render_output(&mut self.out, child)?;
            }
        }

        let summary = registry.summary();
        self.summary(&summary)?;
        self.out.flush()?;
        Ok(summary)
    }

    fn failure_header(&mut self, test: &TestResult) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{} - {}:",
            test.package.style(self.styles.dim),
            test.name.style(self.styles.failure)
        )
    }

    fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        write!(
            self.out,
            "\nSummary:  {}, {}",
            format!("{} passed", summary.passed).style(self.styles.success),
            format!("{} failed", summary.failed).style(self.styles.failure)
        )?;
        if summary.skipped > 0 {
            write!(
                self.out,
                ", {}",
                format!("{} skipped", summary.skipped).style(self.styles.skipped)
            )?;
        }
        writeln!(self.out, ", {} total", summary.total())
    }
}
