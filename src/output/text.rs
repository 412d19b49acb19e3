use std::fmt::Write;

use crate::checker::RunSummary;
use crate::error::Result;
use crate::rank::Rank;
use crate::report::ViolationLog;

use super::{ERROR_PREFIX, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text report: one `xenon: error:` line per violation, in record
/// order. With `verbose >= 1` a per-module summary follows.
///
/// Colors are only ever applied to the summary so that violation lines stay
/// byte-for-byte stable.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize_rank(&self, rank: Rank) -> String {
        if !self.use_colors {
            return rank.to_string();
        }
        let color = match rank {
            Rank::A | Rank::B => ansi::GREEN,
            Rank::C | Rank::D => ansi::YELLOW,
            Rank::E | Rank::F => ansi::RED,
        };
        format!("{color}{rank}{}", ansi::RESET)
    }

    fn format_summary(&self, summary: &RunSummary, violations: usize, output: &mut String) {
        for module in &summary.modules {
            let _ = writeln!(
                output,
                "{}: {} blocks, average {:.2} ({})",
                module.module,
                module.tally.count,
                module.average(),
                self.colorize_rank(module.rank()),
            );
        }
        let _ = writeln!(
            output,
            "Summary: {} blocks in {} modules, average complexity {:.2} ({}), {violations} violations",
            summary.block_count(),
            summary.project.modules,
            summary.project.average(),
            self.colorize_rank(summary.project.rank()),
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, log: &ViolationLog, summary: &RunSummary) -> Result<String> {
        let mut output = String::new();

        for line in log.render() {
            let _ = writeln!(output, "{ERROR_PREFIX}{line}");
        }

        if self.verbose >= 1 {
            self.format_summary(summary, log.count(), &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
