// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal styles
//!
//! Every style is plain until [`Styles::colorize`] is called, so the same
//! rendering code produces uncolored text for pipes and tests.

use owo_colors::Style;

/// Named styles used by the reporter
#[derive(Debug, Default, Clone)]
pub struct Styles {
    /// Whether [`Styles::colorize`] has been applied
    pub is_colorized: bool,
    /// ` RUN ` tag
    pub run_tag: Style,
    /// ` PASS ` tag
    pub pass_tag: Style,
    /// ` FAIL ` tag
    pub fail_tag: Style,
    /// ` SKIP ` tag
    pub skip_tag: Style,
    /// De-emphasized text: package names, context lines, stack noise
    pub dim: Style,
    /// Passing glyphs and `expected:`
    pub success: Style,
    /// Failing glyphs, `actual  :`, the snippet pointer and panic markers
    pub failure: Style,
    /// Skipped sub-test glyphs
    pub skipped: Style,
}

impl Styles {
    /// Turn on colors
    pub fn colorize(&mut self) {
        self.is_colorized = true;
        self.run_tag = Style::new().on_bright_yellow().black().bold();
        self.pass_tag = Style::new().on_bright_green().black().bold();
        self.fail_tag = Style::new().on_bright_red().black().bold();
        self.skip_tag = Style::new().on_bright_blue().black().bold();
        self.dim = Style::new().white().dimmed();
        self.success = Style::new().bright_green().bold();
        self.failure = Style::new().bright_red().bold();
        self.skipped = Style::new().yellow().bold();
    }
}
