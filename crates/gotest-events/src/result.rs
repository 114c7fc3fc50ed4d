// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use crate::event::Action;

/// Handle of a test inside a [`Registry`](crate::registry::Registry)
pub type TestId = usize;

/// Lifecycle state of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    /// Started, no terminal event yet
    Running,
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test was skipped
    Skipped,
}

impl TestStatus {
    /// The terminal status a terminal action leads to
    #[must_use]
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Pass => Some(TestStatus::Passed),
            Action::Fail => Some(TestStatus::Failed),
            Action::Skip => Some(TestStatus::Skipped),
            Action::Run | Action::Output => None,
        }
    }

    /// Whether the test has finished
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != TestStatus::Running
    }
}

/// Everything known about one test in a run
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Full test name; sub-tests are `Parent/child`
    pub name: String,
    /// Package the test belongs to
    pub package: String,
    /// Whether the test runs inside a tracked parent
    pub is_subtest: bool,
    /// Sub-tests, in the order they started
    pub children: Vec<TestId>,
    /// Current status
    pub status: TestStatus,
    /// Output retained for display on failure
    pub output_lines: Vec<String>,
    /// Seconds reported on the terminal event
    pub elapsed: Option<f64>,
}

impl TestResult {
    /// Create a running test
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>, is_subtest: bool) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            is_subtest,
            children: Vec::new(),
            status: TestStatus::Running,
            output_lines: Vec::new(),
            elapsed: None,
        }
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// Name relative to the given parent
    ///
    /// `TestFoo/case_1` under `TestFoo` becomes `case_1`.
    #[must_use]
    pub fn name_under<'a>(&'a self, parent: &str) -> &'a str {
        self.name
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.name)
    }

    /// Human-readable elapsed time, e.g. `5ms` or `2.50s`
    #[must_use]
    pub fn elapsed_display(&self) -> Option<String> {
        let secs = self.elapsed?;
        let ms = (secs * 1000.0).round() as u64;
        Some(if ms < 1000 {
            format!("{ms}ms")
        } else {
            format!("{:.2}s", ms as f64 / 1000.0)
        })
    }
}
