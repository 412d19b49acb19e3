use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{Aggregator, RankSetting, ThresholdPolicy};
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{Result, XenonError};
use crate::extract::{Block, ExtractError, Extractor, RadonExtractor, ReportExtractor};
use crate::output::{
    ERROR_PREFIX, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::report::ViolationLog;
use crate::scanner::{DirectoryScanner, FileFilter, PatternFilter, discover};
use crate::EXIT_CONFIG_ERROR;

/// One module after extraction, successful or not.
#[derive(Debug)]
pub struct AnalyzedModule {
    pub module: String,
    pub outcome: Result<Vec<Block>>,
}

/// Run the quality gate and return the process exit code.
#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_check_impl(cli, &mut out) {
        Ok(code) => i32::from(code),
        Err(e) => {
            log::debug!("{} error: {e:?}", e.error_type());
            let _ = writeln!(out, "{ERROR_PREFIX}{e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run the gate, writing violations and diagnostics to `out`.
///
/// Returns the violation count saturated to `u8`.
///
/// # Errors
/// Returns an error for configuration problems found before analysis, or
/// when the extractor cannot be started at all.
pub fn run_check_impl<W: Write>(cli: &Cli, out: &mut W) -> Result<u8> {
    // 1. Load configuration and apply CLI overrides
    let LoadResult {
        mut config,
        source: config_file,
    } = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);

    // 2. Validate thresholds and patterns before touching any file
    let policy = build_policy(&config, cli, config_file.as_deref())?;
    if policy.is_empty() {
        log::info!("no thresholds configured, nothing can fail");
    }
    let filter = PatternFilter::new(&config.exclude, &config.ignore)?;

    // 3. Discover modules and extract their blocks
    let analyzed = if let Some(report_path) = &cli.report {
        let report = ReportExtractor::from_path(report_path)?;
        log::info!("reading {} modules from {}", report.len(), report_path.display());
        let modules = report_modules(&report, &filter, &cli.paths);
        analyze(&report, &modules, config.no_assert, cli.quiet)
    } else {
        let scan = discover(&DirectoryScanner::new(filter), &cli.paths);
        for error in &scan.errors {
            if !cli.quiet {
                writeln!(out, "{ERROR_PREFIX}{error}")?;
            }
        }
        let extractor = config
            .radon
            .as_deref()
            .map_or_else(RadonExtractor::default, RadonExtractor::new);
        log::info!("measuring complexity with `{}`", extractor.program());
        analyze(&extractor, &scan.files, config.no_assert, cli.quiet)
    };

    // 4. Aggregate in discovery order
    let modules = split_failures(analyzed, out, cli.quiet)?;
    let mut log = ViolationLog::new();
    let summary = Aggregator::new(&policy).process(modules, &mut log);

    // 5. Report
    let formatted = format_output(cli, &log, &summary)?;
    out.write_all(formatted.as_bytes())?;
    out.flush()?;

    Ok(log.exit_code())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Parse the effective thresholds. A malformed letter is reported against
/// the flag that supplied it, or the config key when it came from a file.
fn build_policy(config: &Config, cli: &Cli, config_file: Option<&Path>) -> Result<ThresholdPolicy> {
    let origin = |from_cli: bool, flag: &str, key: &str| match config_file {
        Some(path) if !from_cli => format!("{key} in {}", path.display()),
        _ => flag.to_string(),
    };
    let absolute = origin(cli.max_absolute.is_some(), "--max-absolute", "max_absolute");
    let modules = origin(cli.max_modules.is_some(), "--max-modules", "max_modules");
    let average = origin(cli.max_average.is_some(), "--max-average", "max_average");

    ThresholdPolicy::parse(
        config.max_absolute.as_deref().map(|value| RankSetting::new(value, &absolute)),
        config.max_modules.as_deref().map(|value| RankSetting::new(value, &modules)),
        config.max_average.as_deref().map(|value| RankSetting::new(value, &average)),
    )
}

/// Command-line thresholds and flags win over the config file; pattern
/// lists from both sources are combined, config first.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.max_absolute.is_some() {
        config.max_absolute.clone_from(&cli.max_absolute);
    }
    if cli.max_modules.is_some() {
        config.max_modules.clone_from(&cli.max_modules);
    }
    if cli.max_average.is_some() {
        config.max_average.clone_from(&cli.max_average);
    }
    if cli.radon.is_some() {
        config.radon.clone_from(&cli.radon);
    }
    config.exclude.extend(cli.exclude.iter().cloned());
    config.ignore.extend(cli.ignore.iter().cloned());
    config.no_assert |= cli.no_assert;
}

/// Report entries that pass the exclude/ignore filters and, when paths were
/// given, lie under one of them.
fn report_modules(report: &ReportExtractor, filter: &PatternFilter, roots: &[PathBuf]) -> Vec<PathBuf> {
    report
        .modules()
        .map(PathBuf::from)
        .filter(|path| roots.is_empty() || roots.iter().any(|root| path.starts_with(root)))
        .filter(|path| filter.should_include(path) && !filter.is_under_ignored_dir(path))
        .collect()
}

/// Extract every module in parallel. The result keeps the input order.
fn analyze<E: Extractor>(
    extractor: &E,
    files: &[PathBuf],
    no_assert: bool,
    quiet: bool,
) -> Vec<AnalyzedModule> {
    let progress = ScanProgress::new(files.len(), quiet);
    let analyzed = files
        .par_iter()
        .map(|path| {
            let module = path.display().to_string();
            let outcome = extract_module(extractor, path, &module, no_assert);
            progress.tick(&module);
            AnalyzedModule { module, outcome }
        })
        .collect();
    progress.finish();
    analyzed
}

fn extract_module<E: Extractor>(
    extractor: &E,
    path: &Path,
    module: &str,
    no_assert: bool,
) -> Result<Vec<Block>> {
    let source = if extractor.needs_source() {
        std::fs::read_to_string(path).map_err(|source| XenonError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        String::new()
    };
    Ok(extractor.extract(module, &source, no_assert)?)
}

/// Separate analyzable modules from per-file failures, printing one
/// diagnostic per failure. An extractor that could not even be started is
/// fatal: every other file would fail the same way.
fn split_failures<W: Write>(
    analyzed: Vec<AnalyzedModule>,
    out: &mut W,
    quiet: bool,
) -> Result<Vec<(String, Vec<Block>)>> {
    let mut modules = Vec::with_capacity(analyzed.len());
    for AnalyzedModule { module, outcome } in analyzed {
        match outcome {
            Ok(blocks) => modules.push((module, blocks)),
            Err(e @ XenonError::Extract(ExtractError::Spawn { .. })) => return Err(e),
            Err(e) => {
                log::debug!("skipping {module}: {e}");
                if !quiet {
                    writeln!(out, "{ERROR_PREFIX}cannot analyze \"{module}\": {e}")?;
                }
            }
        }
    }
    Ok(modules)
}

fn format_output(
    cli: &Cli,
    log: &ViolationLog,
    summary: &crate::checker::RunSummary,
) -> Result<String> {
    match cli.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(log, summary)
        }
        OutputFormat::Json => JsonFormatter.format(log, summary),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
