//! Diagnostic types for vize_stencil.
//!
//! Uses `CompactString` for efficient small string storage.

use compact_str::CompactString;
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;
use serde::{Deserialize, Serialize};

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
}

/// Identifier of a diagnostic message.
///
/// The rule has a single message and it carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageId {
    #[serde(rename = "templateExpressionDetected")]
    TemplateExpressionDetected,
}

impl MessageId {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TemplateExpressionDetected => "templateExpressionDetected",
        }
    }

    /// Fixed message text.
    #[inline]
    pub fn message(self) -> &'static str {
        match self {
            Self::TemplateExpressionDetected => "Template expression detected",
        }
    }
}

/// A lint diagnostic anchored at the offending expression.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    pub message_id: MessageId,
    pub severity: Severity,
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
    pub help: Option<CompactString>,
}

impl LintDiagnostic {
    /// Create a diagnostic for `message_id` covering `span`.
    #[inline]
    pub fn new(
        rule_name: &'static str,
        message_id: MessageId,
        severity: Severity,
        span: Span,
    ) -> Self {
        Self {
            rule_name,
            message_id,
            severity,
            message: CompactString::const_new(message_id.message()),
            start: span.start,
            end: span.end,
            help: None,
        }
    }

    /// Add a help message
    #[inline]
    pub fn with_help(mut self, help: impl Into<CompactString>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Convert to OxcDiagnostic for rich rendering
    pub fn into_oxc_diagnostic(self) -> OxcDiagnostic {
        let mut diag = match self.severity {
            Severity::Error => OxcDiagnostic::error(self.message.to_string()),
            Severity::Warning => OxcDiagnostic::warn(self.message.to_string()),
        }
        .with_label(self.span());

        if let Some(help) = self.help {
            diag = diag.with_help(help.to_string());
        }

        diag
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn add(&mut self, diagnostic: &LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
