//! gotest-pretty library
//!
//! This module exports the rendering side of gotest-pretty (configuration,
//! styles, source snippets and the reporter) for use in integration tests and
//! as a library.

pub mod config;
pub mod pipeline;
pub mod reporter;
pub mod resolver;
pub mod source;
pub mod styles;
