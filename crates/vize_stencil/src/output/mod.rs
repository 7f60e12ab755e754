//! Output formatters for lint diagnostics.

mod text;

pub use text::*;

use memchr::memchr_iter;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::diagnostic::{MessageId, Severity};
use crate::linter::LintResult;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    let source_map: FxHashMap<&str, &str> = sources
        .iter()
        .map(|(f, s)| (f.as_str(), s.as_str()))
        .collect();

    match format {
        OutputFormat::Text => format_text(results, &source_map),
        OutputFormat::Json => format_json(results, &source_map),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMessage {
    pub rule_id: &'static str,
    pub message_id: MessageId,
    /// 2 for errors, 1 for warnings
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Line starts of a source, for 1-based line/column lookup.
///
/// Columns count UTF-16 code units, like ESLint.
pub struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<u32>,
}

impl<'s> LineIndex<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based `(line, column)` of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        let column = match self.source.get(start as usize..offset as usize) {
            Some(prefix) if !prefix.is_ascii() => prefix.encode_utf16().count() as u32,
            _ => offset - start,
        };
        (line as u32 + 1, column + 1)
    }
}

fn format_json(results: &[LintResult], sources: &FxHashMap<&str, &str>) -> String {
    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let index = LineIndex::new(sources.get(r.filename.as_str()).copied().unwrap_or(""));
            JsonFileResult {
                file: r.filename.clone(),
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = index.line_col(d.start);
                        let (end_line, end_column) = index.line_col(d.end);
                        JsonMessage {
                            rule_id: d.rule_name,
                            message_id: d.message_id,
                            severity: match d.severity {
                                Severity::Error => 2,
                                Severity::Warning => 1,
                            },
                            message: d.message.to_string(),
                            line,
                            column,
                            end_line,
                            end_column,
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}
