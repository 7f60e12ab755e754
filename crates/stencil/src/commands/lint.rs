//! Lint command - Check class names in JS/TS/JSX and Vue SFC files

use clap::{Args, ValueEnum};
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vize_stencil::{
    format_results, format_summary, FileKind, LintResult, LintSummary, Linter, OutputFormat,
    StencilConfig,
};

/// Exit code when diagnostics fail the run
const EXIT_LINT_FAILURE: i32 = 1;
/// Exit code when the configuration cannot be used
const EXIT_CONFIG_ERROR: i32 = 2;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Rich terminal output with code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args, Default)]
pub struct LintArgs {
    /// Files, directories or glob patterns to lint (default: .)
    pub patterns: Vec<String>,

    /// Config file path (default: ./stencil.config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Maximum number of warnings before failing
    #[arg(long)]
    pub max_warnings: Option<usize>,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

fn is_lintable(path: &Path) -> bool {
    path.to_str().and_then(FileKind::from_path).is_some()
        && !path.components().any(|c| c.as_os_str() == "node_modules")
}

fn has_glob_chars(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Expand patterns into the list of files to lint.
fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = patterns
        .iter()
        .flat_map(|pattern| {
            if has_glob_chars(pattern) {
                glob(pattern)
                    .map_err(|e| tracing::warn!(pattern = %pattern, "invalid glob: {e}"))
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_lintable(p))
                    .collect::<Vec<_>>()
            } else {
                // Directory walking respects .gitignore
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
                    .map(|e| e.into_path())
                    .filter(|p| is_lintable(p))
                    .collect::<Vec<_>>()
            }
        })
        .collect();

    files.sort();
    files.dedup();
    files
}

fn load_config(path: Option<&Path>) -> Result<StencilConfig, vize_stencil::ConfigError> {
    match path {
        Some(path) => StencilConfig::load(path),
        None => StencilConfig::discover(Path::new(".")),
    }
}

fn build_linter(config: &StencilConfig) -> Result<Linter, vize_stencil::ConfigError> {
    let linter = Linter::with_settings(config.resolve()?);
    Ok(match config.severity {
        Some(severity) => linter.with_severity(severity),
        None => linter,
    })
}

/// Exit code for a finished run, `None` when it passed.
fn exit_code(summary: &LintSummary, max_warnings: Option<usize>) -> Option<i32> {
    if summary.has_errors() {
        return Some(EXIT_LINT_FAILURE);
    }
    match max_warnings {
        Some(max) if summary.warning_count > max => Some(EXIT_LINT_FAILURE),
        _ => None,
    }
}

pub fn run(args: LintArgs) {
    let start = Instant::now();

    let linter = match load_config(args.config.as_deref()).and_then(|c| build_linter(&c)) {
        Ok(linter) => linter,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let patterns = if args.patterns.is_empty() {
        vec![".".to_string()]
    } else {
        args.patterns
    };
    let files = collect_files(&patterns);
    tracing::debug!(files = files.len(), "collected files");

    if files.is_empty() {
        eprintln!("No lintable files found matching patterns: {:?}", patterns);
        return;
    }

    // Lint all files in parallel, keeping the sorted file order
    let results: Vec<(String, String, LintResult)> = files
        .par_iter()
        .filter_map(|path| {
            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    return None;
                }
            };

            let filename = path.to_string_lossy().to_string();
            let result = linter.lint_file(&source, &filename);
            Some((filename, source, result))
        })
        .collect();

    let mut summary = LintSummary {
        file_count: results.len(),
        ..Default::default()
    };
    for (_, _, result) in &results {
        summary.error_count += result.error_count;
        summary.warning_count += result.warning_count;
    }

    let format = OutputFormat::from(args.format);
    let show_diagnostics = !args.quiet || format == OutputFormat::Json;
    if show_diagnostics {
        let (sources, lint_results): (Vec<_>, Vec<_>) = results
            .into_iter()
            .map(|(filename, source, result)| ((filename, source), result))
            .unzip();

        let output = format_results(&lint_results, &sources, format);
        if !output.trim().is_empty() {
            print!("{}", output);
            if format == OutputFormat::Json {
                println!();
            }
        }
    }

    if format == OutputFormat::Text {
        println!(
            "\n{}",
            format_summary(summary.error_count, summary.warning_count, summary.file_count)
        );
        println!("Linted {} files in {:.4?}", summary.file_count, start.elapsed());
    }

    if let Some(code) = exit_code(&summary, args.max_warnings) {
        if !summary.has_errors() {
            if let Some(max) = args.max_warnings {
                eprintln!("\nToo many warnings ({} > max {})", summary.warning_count, max);
            }
        }
        std::process::exit(code);
    }
}
