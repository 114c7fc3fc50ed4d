// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -json` event decoding
//!
//! Each line of the stream is either a JSON object describing a test event or
//! arbitrary text (build errors, output from tools wrapping `go test`). Text lines
//! are never dropped; they come back as [`Decoded::Passthrough`].
//!
//! # Example
//!
//! ```
//! use gotest_events::event::{Action, Decoded, decode_line};
//!
//! let line = r#"{"Action":"run","Package":"example.com/pkg","Test":"TestOne"}"#;
//! match decode_line(line).unwrap() {
//!     Decoded::Event(event) => assert_eq!(event.action, Action::Run),
//!     Decoded::Passthrough(_) => unreachable!(),
//! }
//! ```

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EventsError;

// ============================================================================
// Event Types
// ============================================================================

/// The kind of change an event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A test started
    Run,
    /// A test passed
    Pass,
    /// A test failed
    Fail,
    /// A test was skipped
    Skip,
    /// A test (or package) printed a line
    Output,
}

impl Action {
    /// The wire name of the action
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Run => "run",
            Action::Pass => "pass",
            Action::Fail => "fail",
            Action::Skip => "skip",
            Action::Output => "output",
        }
    }

    /// Whether the action ends a test
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::Pass | Action::Fail | Action::Skip)
    }
}

impl FromStr for Action {
    type Err = EventsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(Action::Run),
            "pass" => Ok(Action::Pass),
            "fail" => Ok(Action::Fail),
            "skip" => Ok(Action::Skip),
            "output" => Ok(Action::Output),
            other => Err(EventsError::UnknownAction {
                action: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of `go test -json` output as it appears on the wire
///
/// `Action` is kept as a string so that an unrecognized action can be told
/// apart from a line that is not an event at all.
#[derive(Debug, Clone, Deserialize)]
struct RawEvent {
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Package", default)]
    package: String,
    #[serde(rename = "Test", default)]
    test: String,
    #[serde(rename = "Output", default)]
    output: String,
    #[serde(rename = "Elapsed", default)]
    elapsed: Option<f64>,
}

/// A decoded test event
#[derive(Debug, Clone, PartialEq)]
pub struct TestEvent {
    /// What happened
    pub action: Action,
    /// Import path of the package the test belongs to
    pub package: String,
    /// Test name; empty for package-level events
    pub test: String,
    /// Printed text (only for [`Action::Output`])
    pub output: String,
    /// Seconds the test took (terminal events only)
    pub elapsed: Option<f64>,
}

impl TestEvent {
    /// Create an event with no output and no elapsed time
    #[must_use]
    pub fn new(action: Action, package: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            action,
            package: package.into(),
            test: test.into(),
            output: String::new(),
            elapsed: None,
        }
    }

    /// Create an [`Action::Output`] event
    #[must_use]
    pub fn output(
        package: impl Into<String>,
        test: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            output: output.into(),
            ..Self::new(Action::Output, package, test)
        }
    }

    /// Whether the event concerns a whole package rather than a single test
    #[must_use]
    pub fn is_package_level(&self) -> bool {
        self.test.is_empty()
    }
}

impl TryFrom<RawEvent> for TestEvent {
    type Error = EventsError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            action: raw.action.parse()?,
            package: raw.package,
            test: raw.test,
            output: raw.output,
            elapsed: raw.elapsed,
        })
    }
}

/// Result of decoding one input line
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The line was a test event
    Event(TestEvent),
    /// The line was not an event and should be printed unchanged
    Passthrough(String),
}

// ============================================================================
// Decoding Functions
// ============================================================================

/// Decode a single line of the stream
///
/// Lines that are not JSON objects with a string `Action` field are returned as
/// [`Decoded::Passthrough`].
///
/// # Errors
///
/// Returns `EventsError::UnknownAction` if the line is an event whose action is
/// not one of `run`, `pass`, `fail`, `skip` or `output`.
pub fn decode_line(line: &str) -> Result<Decoded, EventsError> {
    match serde_json::from_str::<RawEvent>(line) {
        Ok(raw) => Ok(Decoded::Event(TestEvent::try_from(raw)?)),
        Err(_) => Ok(Decoded::Passthrough(line.to_string())),
    }
}

/// Parse a single line that is expected to be an event
///
/// # Errors
///
/// Returns `EventsError::JsonParse` if the JSON is invalid, or
/// `EventsError::UnknownAction` if the action is not recognized.
pub fn parse_event(json: &str) -> Result<TestEvent, EventsError> {
    let raw: RawEvent = serde_json::from_str(json)?;
    TestEvent::try_from(raw)
}

/// Iterate over the lines of a reader without losing any of them
///
/// Invalid UTF-8 is replaced rather than rejected, and a trailing `\r` is
/// stripped along with the `\n`.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, EventsError>> {
    reader.split(b'\n').map(|bytes| {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}
