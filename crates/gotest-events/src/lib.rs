// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gotest-events: event decoding and test state tracking for gotest-pretty
//!
//! This library crate turns the line-oriented output of `go test -json` into a
//! registry of tests, sub-tests, their outcomes and the output worth showing when
//! they fail. It does no rendering and no file-system access.
//!
//! # Example
//!
//! ```
//! use gotest_events::event::{Decoded, decode_line};
//! use gotest_events::registry::Registry;
//!
//! let stream = r#"{"Action":"run","Package":"p","Test":"TestOne"}
//! {"Action":"pass","Package":"p","Test":"TestOne"}"#;
//!
//! let mut registry = Registry::new();
//! for line in stream.lines() {
//!     if let Decoded::Event(event) = decode_line(line).unwrap() {
//!         registry.apply(event);
//!     }
//! }
//! assert_eq!(registry.summary().passed, 1);
//! ```

pub mod classify;
pub mod error;
pub mod event;
pub mod location;
pub mod registry;
pub mod result;

pub use classify::{Classification, NoiseKind, classify};
pub use error::EventsError;
pub use event::{Action, Decoded, TestEvent, decode_line, parse_event};
pub use location::FileLocation;
pub use registry::{Registry, RunSummary, Transition};
pub use result::{TestId, TestResult, TestStatus};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::EventsError;
    pub use crate::event::{Decoded, TestEvent, decode_line};
    pub use crate::registry::{Registry, Transition};
    pub use crate::result::{TestResult, TestStatus};
}
