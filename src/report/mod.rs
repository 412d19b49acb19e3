use crate::checker::Violation;

/// Receives violations as the aggregator finds them.
pub trait ReportSink {
    fn record(&mut self, violation: Violation);
}

/// Ordered in-memory log of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationLog {
    violations: Vec<Violation>,
}

impl ViolationLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// One line per violation, in the order they were recorded.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Process exit status for this log: the violation count, saturated so
    /// that a count that is a multiple of 256 can never read as success.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.count()).unwrap_or(u8::MAX)
    }
}

impl ReportSink for ViolationLog {
    fn record(&mut self, violation: Violation) {
        log::debug!("violation: {violation}");
        self.violations.push(violation);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
