// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test registry and state machine
//!
//! The registry rebuilds the test/sub-test tree from the flat event stream. Tests
//! live in an arena in the order they started; parents refer to their sub-tests by
//! [`TestId`], and a sub-test finds its parent by looking up the `/`-delimited
//! prefixes of its own name.
//!
//! Applying an event never prints anything. It returns a [`Transition`] that says
//! what changed, and the caller decides how to render it.
//!
//! # Example
//!
//! ```
//! use gotest_events::event::{Action, TestEvent};
//! use gotest_events::registry::{Registry, Transition};
//!
//! let mut registry = Registry::new();
//! registry.apply(TestEvent::new(Action::Run, "p", "TestOne"));
//! let transition = registry.apply(TestEvent::new(Action::Pass, "p", "TestOne"));
//! assert!(matches!(transition, Transition::Finished(_)));
//! assert_eq!(registry.summary().passed, 1);
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::classify::{Classification, NoiseKind, classify};
use crate::event::{Action, TestEvent};
use crate::result::{TestId, TestResult, TestStatus};

/// What applying an event did to the registry
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A top-level test started
    Started(TestId),
    /// A sub-test started under a tracked parent
    SubtestStarted(TestId),
    /// A top-level test reached a terminal status
    Finished(TestId),
    /// A sub-test reached a terminal status
    SubtestFinished(TestId),
    /// Output was retained for a test
    Retained(TestId),
    /// Output was discarded as noise
    Dropped(TestId, NoiseKind),
    /// Output for a test that is not tracked (package-level output and the like)
    Unclassified(String),
    /// The event did not change anything
    Ignored,
}

/// Counts of top-level test outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Tests that never received a terminal event
    pub unfinished: usize,
}

impl RunSummary {
    /// Tests that finished, whatever the outcome
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Every test seen in a run, keyed by name and kept in start order
#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<TestResult>,
    by_name: HashMap<String, TestId>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn apply(&mut self, event: TestEvent) -> Transition {
        match event.action {
            Action::Run => self.on_run(event),
            Action::Output => self.on_output(event),
            Action::Pass | Action::Fail | Action::Skip => self.on_terminal(event),
        }
    }

    fn on_run(&mut self, event: TestEvent) -> Transition {
        if let Some(&existing) = self.by_name.get(&event.test) {
            let tracked = &self.tests[existing].package;
            if *tracked == event.package {
                debug!(test = %event.test, "duplicate run event ignored");
            } else {
                debug!(
                    test = %event.test,
                    tracked_package = %tracked,
                    other_package = %event.package,
                    "test name already tracked for another package, run ignored"
                );
            }
            return Transition::Ignored;
        }

        let parent = self.parent_of(&event.test);
        let id = self.tests.len();
        self.tests
            .push(TestResult::new(&event.test, &event.package, parent.is_some()));
        self.by_name.insert(event.test, id);

        match parent {
            Some(parent) => {
                self.tests[parent].children.push(id);
                trace!(test = %self.tests[id].name, "sub-test started");
                Transition::SubtestStarted(id)
            }
            None => Transition::Started(id),
        }
    }

    fn on_output(&mut self, event: TestEvent) -> Transition {
        let Some(&id) = self.by_name.get(&event.test) else {
            return Transition::Unclassified(event.output);
        };

        let test = &mut self.tests[id];
        match classify(&event.output, &test.output_lines, &test.name, &test.package) {
            Classification::Keep => {
                if test.status.is_terminal() {
                    debug!(test = %test.name, "output after terminal event");
                }
                test.output_lines.push(event.output);
                Transition::Retained(id)
            }
            Classification::Drop(kind) => {
                trace!(test = %test.name, ?kind, "output dropped");
                Transition::Dropped(id, kind)
            }
        }
    }

    fn on_terminal(&mut self, event: TestEvent) -> Transition {
        let Some(&id) = self.by_name.get(&event.test) else {
            if !event.is_package_level() {
                debug!(test = %event.test, action = %event.action, "event for unknown test ignored");
            }
            return Transition::Ignored;
        };
        let Some(status) = TestStatus::from_action(event.action) else {
            return Transition::Ignored;
        };

        let test = &mut self.tests[id];
        if test.status.is_terminal() {
            debug!(test = %test.name, "repeated terminal event ignored");
            return Transition::Ignored;
        }
        test.status = status;
        test.elapsed = event.elapsed;

        if test.is_subtest {
            Transition::SubtestFinished(id)
        } else {
            Transition::Finished(id)
        }
    }

    /// The tracked top-level test a name is nested under
    ///
    /// Prefixes are tried longest first, so `A/b/c` finds `A` even when `A/b` is
    /// itself a tracked sub-test.
    #[must_use]
    pub fn parent_of(&self, name: &str) -> Option<TestId> {
        name.rmatch_indices('/')
            .filter_map(|(idx, _)| self.by_name.get(&name[..idx]).copied())
            .find(|&id| !self.tests[id].is_subtest)
    }

    /// Look up a test by handle
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this registry.
    #[must_use]
    pub fn get(&self, id: TestId) -> &TestResult {
        &self.tests[id]
    }

    /// Look up a test by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TestResult> {
        self.by_name.get(name).map(|&id| &self.tests[id])
    }

    /// All tests, in the order they started
    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.tests.iter()
    }

    /// Top-level tests, in the order they started
    pub fn top_level(&self) -> impl Iterator<Item = &TestResult> {
        self.tests.iter().filter(|t| !t.is_subtest)
    }

    /// Sub-tests of a test, in the order they started
    pub fn children<'a>(&'a self, test: &'a TestResult) -> impl Iterator<Item = &'a TestResult> {
        test.children.iter().map(|&id| &self.tests[id])
    }

    /// Number of tracked tests, sub-tests included
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if no test has started
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Count top-level outcomes
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for test in self.top_level() {
            match test.status {
                TestStatus::Passed => summary.passed += 1,
                TestStatus::Failed => summary.failed += 1,
                TestStatus::Skipped => summary.skipped += 1,
                TestStatus::Running => summary.unfinished += 1,
            }
        }
        summary
    }
}
