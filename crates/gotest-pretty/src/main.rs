//! gotest-pretty: human-friendly rendering of `go test -json` output
//!
//! This binary reads test events from stdin and writes a live progress report,
//! failure details with source snippets, and a summary to stdout.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use gotest_pretty::config::Config;
use gotest_pretty::pipeline;
use gotest_pretty::reporter::ReportOptions;
use gotest_pretty::source::FsLoader;
use gotest_pretty::styles::Styles;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate().context("invalid configuration")?;

    let mut styles = Styles::default();
    if config.should_colorize() {
        styles.colorize();
    }

    let root = config
        .workspace_path()
        .context("could not determine the workspace directory")?;
    debug!(root = %root.display(), colorized = styles.is_colorized, "starting");
    let loader = FsLoader::new(root);

    let stdout = io::stdout();
    let options = ReportOptions {
        overwrite_run_line: stdout.is_terminal(),
        show_elapsed: config.elapsed,
    };

    let summary = pipeline::run(io::stdin().lock(), stdout.lock(), &styles, &loader, options)
        .context("failed to process test events")?;
    debug!(?summary, "run complete");

    Ok(())
}
