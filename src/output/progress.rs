use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} files {wide_msg}";

/// Extraction progress on stderr.
///
/// Hidden in quiet mode and whenever stderr is not a terminal, so piped
/// and captured output never contains bar fragments. Cloning shares the
/// underlying bar, which makes it usable from rayon workers.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        Self::with_visibility(total, !quiet && std::io::stderr().is_terminal())
    }

    fn with_visibility(total: usize, visible: bool) -> Self {
        let total = u64::try_from(total).unwrap_or(u64::MAX);
        let bar = if visible {
            let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
                bar.set_style(style.progress_chars("█▓░"));
            }
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Mark one module as done.
    pub fn tick(&self, module: &str) {
        self.bar.set_message(module.to_string());
        self.bar.inc(1);
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
