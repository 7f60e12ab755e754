//! Rich terminal output using oxc_diagnostics.

use std::sync::Arc;

use oxc_diagnostics::{GraphicalReportHandler, GraphicalTheme, NamedSource};
use rustc_hash::FxHashMap;

use crate::linter::LintResult;

/// Format lint results as rich terminal output
pub fn format_text(results: &[LintResult], sources: &FxHashMap<&str, &str>) -> String {
    let mut output = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    for result in results.iter().filter(|r| r.has_diagnostics()) {
        let source = sources.get(result.filename.as_str()).copied().unwrap_or("");
        let named_source = Arc::new(NamedSource::new(&result.filename, source.to_string()));

        for diagnostic in &result.diagnostics {
            let report = diagnostic
                .clone()
                .into_oxc_diagnostic()
                .with_source_code(Arc::clone(&named_source));

            let mut buf = String::new();
            if handler.render_report(&mut buf, report.as_ref()).is_ok() {
                output.push_str(&buf);
                output.push('\n');
            }
        }
    }

    output
}

fn plural(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}

/// Format a summary line
pub fn format_summary(error_count: usize, warning_count: usize, file_count: usize) -> String {
    let mut parts = Vec::with_capacity(2);
    if error_count > 0 {
        parts.push(plural(error_count, "error"));
    }
    if warning_count > 0 {
        parts.push(plural(warning_count, "warning"));
    }

    if parts.is_empty() {
        format!("No problems found in {}", plural(file_count, "file"))
    } else {
        format!("{} in {}", parts.join(", "), plural(file_count, "file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(0, 0, 3), "No problems found in 3 files");
        assert_eq!(format_summary(1, 0, 1), "1 error in 1 file");
        assert_eq!(format_summary(2, 1, 2), "2 errors, 1 warning in 2 files");
    }

    #[test]
    fn test_format_text_renders_message() {
        let source = "<div class={`w-${dada}`}>Template literal!</div>";
        let result = Linter::new().lint_file(source, "demo.jsx");
        let mut sources = FxHashMap::default();
        sources.insert("demo.jsx", source);

        let output = format_text(&[result], &sources);
        assert!(output.contains("Template expression detected"));
        assert!(output.contains("demo.jsx"));
    }

    #[test]
    fn test_format_text_skips_clean_files() {
        let result = Linter::new().lint_file("<div class=\"flex\" />", "clean.jsx");
        assert!(format_text(&[result], &FxHashMap::default()).is_empty());
    }
}
