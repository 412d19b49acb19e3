use crate::rank::Rank;

/// Running sum and count of complexity scores.
///
/// `combine` is associative with `Tally::default()` as identity, so tallies
/// can be folded per module and then across modules in any grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub sum: f64,
    pub count: usize,
}

impl Tally {
    #[must_use]
    pub fn record(self, score: f64) -> Self {
        Self {
            sum: self.sum + score,
            count: self.count + 1,
        }
    }

    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }

    /// Mean score, or `0.0` for an empty tally.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}

/// Finalized statistics of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStat {
    pub module: String,
    pub tally: Tally,
}

impl ModuleStat {
    #[must_use]
    pub fn new(module: impl Into<String>, tally: Tally) -> Self {
        Self {
            module: module.into(),
            tally,
        }
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        self.tally.average()
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::classify(self.average())
    }
}

/// Statistics across every block of a run, regardless of module.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectStat {
    pub tally: Tally,
    pub modules: usize,
}

impl ProjectStat {
    #[must_use]
    pub fn absorb(self, module: &ModuleStat) -> Self {
        Self {
            tally: self.tally.combine(module.tally),
            modules: self.modules + 1,
        }
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        self.tally.average()
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::classify(self.average())
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
