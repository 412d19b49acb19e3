mod aggregator;
mod stats;
mod threshold;
mod violation;

pub use aggregator::{Aggregator, RunSummary};
pub use stats::{ModuleStat, ProjectStat, Tally};
pub use threshold::{RankSetting, ThresholdPolicy};
pub use violation::{Violation, ViolationLevel};
