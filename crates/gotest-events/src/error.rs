// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gotest-events

use thiserror::Error;

/// Errors that can occur while decoding and applying test events
#[derive(Debug, Error)]
pub enum EventsError {
    /// Error parsing JSON
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Error reading the event stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The producer emitted an action this tool does not understand
    #[error("Unknown test action: {action}")]
    UnknownAction {
        /// The unrecognized `Action` value
        action: String,
    },
}
