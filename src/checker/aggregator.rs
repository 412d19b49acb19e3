use crate::extract::Block;
use crate::rank::Rank;
use crate::report::ReportSink;

use super::stats::{ModuleStat, ProjectStat, Tally};
use super::threshold::ThresholdPolicy;
use super::violation::Violation;

/// Final statistics of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub modules: Vec<ModuleStat>,
    pub project: ProjectStat,
}

impl RunSummary {
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.project.tally.count
    }
}

/// Folds modules and their blocks into statistics, reporting every
/// threshold breach to a sink.
///
/// Violations reach the sink in a fixed order: a module's block violations
/// in block order, then that module's own violation, module after module,
/// and the project average violation last.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    policy: &'a ThresholdPolicy,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub const fn new(policy: &'a ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// Check one module's blocks and its average.
    pub fn process_module(
        &self,
        module: &str,
        blocks: &[Block],
        sink: &mut dyn ReportSink,
    ) -> ModuleStat {
        let tally = blocks.iter().fold(Tally::default(), |tally, block| {
            let rank = Rank::classify(block.complexity());
            if self.policy.violates_absolute(rank) {
                sink.record(Violation::block(module, block.name(), block.line(), rank));
            }
            tally.record(block.complexity())
        });

        let stat = ModuleStat::new(module, tally);
        // An empty module averages to 0, which is always rank A.
        let rank = stat.rank();
        if self.policy.violates_module(rank) {
            sink.record(Violation::module(module, rank));
        }
        stat
    }

    /// Run the whole accounting pass over `modules`, in order.
    pub fn process<I, S, B>(&self, modules: I, sink: &mut dyn ReportSink) -> RunSummary
    where
        I: IntoIterator<Item = (S, B)>,
        S: AsRef<str>,
        B: AsRef<[Block]>,
    {
        let (modules, project) = modules.into_iter().fold(
            (Vec::new(), ProjectStat::default()),
            |(mut stats, project), (module, blocks)| {
                let stat = self.process_module(module.as_ref(), blocks.as_ref(), sink);
                let project = project.absorb(&stat);
                stats.push(stat);
                (stats, project)
            },
        );

        let rank = project.rank();
        if self.policy.violates_average(rank) {
            sink.record(Violation::average(rank));
        }

        log::info!(
            "analyzed {} blocks in {} modules, average complexity {:.2} ({rank})",
            project.tally.count,
            project.modules,
            project.average(),
        );

        RunSummary { modules, project }
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
