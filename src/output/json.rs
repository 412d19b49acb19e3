use serde::Serialize;

use crate::checker::{ModuleStat, RunSummary, Violation, ViolationLevel};
use crate::error::Result;
use crate::rank::Rank;
use crate::report::ViolationLog;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
    modules: Vec<JsonModule<'a>>,
}

#[derive(Serialize)]
struct Summary {
    modules: usize,
    blocks: usize,
    average: f64,
    rank: Rank,
    violations: usize,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    rank: Rank,
    message: String,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    path: &'a str,
    blocks: usize,
    average: f64,
    rank: Rank,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, log: &ViolationLog, summary: &RunSummary) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                modules: summary.project.modules,
                blocks: summary.block_count(),
                average: summary.project.average(),
                rank: summary.project.rank(),
                violations: log.count(),
            },
            violations: log.violations().iter().map(convert_violation).collect(),
            modules: summary.modules.iter().map(convert_module).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation<'_> {
    let (name, line) = match &violation.level {
        ViolationLevel::Block { name, line, .. } => (Some(name.as_str()), Some(*line)),
        ViolationLevel::Module { .. } | ViolationLevel::Average => (None, None),
    };
    JsonViolation {
        level: violation.level.as_str(),
        module: violation.level.module(),
        name,
        line,
        rank: violation.rank,
        message: violation.to_string(),
    }
}

fn convert_module(module: &ModuleStat) -> JsonModule<'_> {
    JsonModule {
        path: &module.module,
        blocks: module.tally.count,
        average: module.average(),
        rank: module.rank(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
