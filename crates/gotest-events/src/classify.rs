// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output classification
//!
//! `go test` and assertion libraries repeat a lot of what the event stream already
//! says structurally. These predicates pick out that noise so only output worth
//! showing on failure is retained.

use crate::location;

/// Why a line of output was considered noise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    /// `Error Trace:` restating the location on the previous line
    ErrorTrace,
    /// `Test:` restating the test name
    TestName,
    /// `? pkg [no test files]`
    NoTestFiles,
    /// `=== RUN`, `--- FAIL` or `--- PASS` markers
    StatusMarker,
}

/// Outcome of classifying one line of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Retain the line
    Keep,
    /// Discard the line
    Drop(NoiseKind),
}

impl Classification {
    /// Whether the line should be retained
    #[must_use]
    pub fn is_keep(self) -> bool {
        self == Classification::Keep
    }
}

const STATUS_MARKERS: [&str; 3] = ["=== RUN", "--- FAIL", "--- PASS"];

/// Classify a new output line for a test
///
/// `retained` is what has been kept for the test so far; only its last line is
/// consulted.
#[must_use]
pub fn classify(line: &str, retained: &[String], test: &str, package: &str) -> Classification {
    let stripped = line.trim_start_matches(' ');

    if restates_previous_location(stripped, retained) {
        return Classification::Drop(NoiseKind::ErrorTrace);
    }

    if stripped.contains("Test:") && stripped.contains(test) {
        return Classification::Drop(NoiseKind::TestName);
    }

    if stripped.starts_with('?')
        && stripped.contains("[no test files]")
        && stripped.contains(package)
    {
        return Classification::Drop(NoiseKind::NoTestFiles);
    }

    if STATUS_MARKERS
        .iter()
        .any(|marker| stripped.starts_with(marker))
    {
        return Classification::Drop(NoiseKind::StatusMarker);
    }

    Classification::Keep
}

fn restates_previous_location(line: &str, retained: &[String]) -> bool {
    let Some(previous) = retained.last() else {
        return false;
    };
    match location::sole_token(previous) {
        Some(token) => line.contains("Error Trace:") && line.contains(token),
        None => false,
    }
}
