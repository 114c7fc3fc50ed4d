// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The read → apply → render loop
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//!
//! use gotest_pretty::pipeline::run;
//! use gotest_pretty::reporter::ReportOptions;
//! use gotest_pretty::styles::Styles;
//!
//! let input = r#"{"Action":"run","Package":"pkg","Test":"T1"}
//! {"Action":"pass","Package":"pkg","Test":"T1"}
//! "#;
//! let sources: HashMap<PathBuf, String> = HashMap::new();
//! let mut out = Vec::new();
//! let summary = run(
//!     input.as_bytes(),
//!     &mut out,
//!     &Styles::default(),
//!     &sources,
//!     ReportOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(summary.passed, 1);
//! ```

use std::io::{self, BufRead, Write};

use gotest_events::EventsError;
use gotest_events::event::{self, Decoded, decode_line};
use gotest_events::registry::{Registry, RunSummary};
use thiserror::Error;
use tracing::debug;

use crate::reporter::{ReportOptions, Reporter};
use crate::resolver::SnippetResolver;
use crate::source::SourceLoader;
use crate::styles::Styles;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The event stream could not be read or contained an unknown action
    #[error(transparent)]
    Events(#[from] EventsError),

    /// The report could not be written
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Process an event stream to EOF and print the final report
///
/// # Errors
///
/// Returns `RunError::Events` if reading fails or an event has an unknown
/// action (no summary is printed in that case), and `RunError::Output` if
/// writing the report fails.
pub fn run<R, W, L>(
    input: R,
    out: W,
    styles: &Styles,
    loader: &L,
    options: ReportOptions,
) -> Result<RunSummary, RunError>
where
    R: BufRead,
    W: Write,
    L: SourceLoader + ?Sized,
{
    let mut registry = Registry::new();
    let mut reporter = Reporter::new(out, styles, options);
    let mut lines_read = 0usize;

    for line in event::lines(input) {
        let line = line?;
        lines_read += 1;
        match decode_line(&line)? {
            Decoded::Event(event) => {
                let transition = registry.apply(event);
                reporter.transition(&registry, &transition)?;
            }
            Decoded::Passthrough(text) => reporter.passthrough(&text)?,
        }
    }

    debug!(lines_read, tests = registry.len(), "end of event stream");

    let resolver = SnippetResolver::new(loader, styles);
    Ok(reporter.finish(&registry, &resolver)?)
}
