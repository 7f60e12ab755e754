//! Lint context collecting diagnostics for one file.

use oxc_span::Span;

use crate::diagnostic::{LintDiagnostic, MessageId, Severity};
use crate::scan::DiagnosticSink;

const HELP: &str = "Use complete class names, e.g. map each case to a full class string";

/// Context for one lint run.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Rule whose offenses are being reported
    pub current_rule: &'static str,
    severity: Severity,
    diagnostics: Vec<LintDiagnostic>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    #[inline]
    pub fn new(source: &'a str, filename: &'a str, rule: &'static str, severity: Severity) -> Self {
        Self {
            source,
            filename,
            current_rule: rule,
            severity,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get collected diagnostics, ordered by position
    pub fn into_diagnostics(mut self) -> Vec<LintDiagnostic> {
        self.diagnostics.sort_by_key(|d| (d.start, d.end));
        self.diagnostics
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

impl DiagnosticSink for LintContext<'_> {
    fn report_offense(&mut self, span: Span) {
        tracing::trace!(
            rule = self.current_rule,
            file = self.filename,
            start = span.start,
            end = span.end,
            "template expression in class name"
        );
        self.report(
            LintDiagnostic::new(
                self.current_rule,
                MessageId::TemplateExpressionDetected,
                self.severity,
                span,
            )
            .with_help(HELP),
        );
    }
}
