//! Configuration for gotest-pretty
//!
//! This module provides the command-line configuration: color handling, where
//! to look for source files, and logging options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Pretty-print `go test -json` output
///
/// Reads test events from stdin and writes a colorized progress report and
/// failure summary to stdout.
///
/// Example:
///   go test -json ./... | gotest-pretty
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gotest-pretty")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// When to produce colored output
    #[arg(long, value_enum, default_value_t = Color::Auto, env = "GOTEST_PRETTY_COLOR")]
    pub color: Color,

    /// Directory to search for source files when rendering snippets
    ///
    /// Files are looked up by trying the trailing segments of each test's package
    /// path as subdirectories of this directory. Defaults to the current working
    /// directory.
    #[arg(short, long, env = "GOTEST_PRETTY_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Show how long each test took next to its result
    #[arg(long, default_value = "false")]
    pub elapsed: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only log errors
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Color output setting
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Color {
    /// Color when stdout supports it
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl Color {
    /// Determines whether output should be colorized based on whether the given stream supports this
    #[must_use]
    pub fn should_colorize(self, stream: supports_color::Stream) -> bool {
        match self {
            Color::Auto => supports_color::on_cached(stream).is_some(),
            Color::Always => true,
            Color::Never => false,
        }
    }
}

impl Config {
    /// Get the workspace path, using current directory as default
    ///
    /// Returns `None` if no workspace is specified and the current
    /// directory cannot be determined.
    #[must_use]
    pub fn workspace_path(&self) -> Option<PathBuf> {
        self.workspace
            .clone()
            .or_else(|| std::env::current_dir().ok())
    }

    /// Whether the report on stdout should be colorized
    #[must_use]
    pub fn should_colorize(&self) -> bool {
        self.color.should_colorize(supports_color::Stream::Stdout)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The workspace path is specified but doesn't exist
    /// - The workspace path is not a directory
    /// - No workspace is given and the current directory is unavailable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref workspace) = self.workspace {
            if !workspace.exists() {
                return Err(ConfigError::WorkspaceNotFound(workspace.clone()));
            }
            if !workspace.is_dir() {
                return Err(ConfigError::WorkspaceNotDirectory(workspace.clone()));
            }
        } else if self.workspace_path().is_none() {
            return Err(ConfigError::CurrentDirUnavailable);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Workspace path not found
    #[error("Workspace path not found: {0}")]
    WorkspaceNotFound(PathBuf),

    /// Workspace path is not a directory
    #[error("Workspace path is not a directory: {0}")]
    WorkspaceNotDirectory(PathBuf),

    /// No workspace given and the working directory cannot be determined
    #[error("Current directory is unavailable; pass --workspace")]
    CurrentDirUnavailable,
}
