//! tailwindcss/no-template-expression
//!
//! Forbid template expressions in class names.
//!
//! Tailwind CSS finds class names by scanning source text, so a class built
//! from an interpolation (`` `w-${size}` ``) is never generated. Every
//! interpolated expression inside a class-producing template literal is
//! reported.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! <div class={`w-${dada}`}>Template literal!</div>
//! <div class={`bg-${bg} text-${text}`}>Arbitrary values!</div>
//! ```
//!
//! ```js
//! // with callees: ["classnames"]
//! classnames([`flex text-${text}`], myFlag && [`w-${width}`])
//! ```
//!
//! ### Valid
//! ```jsx
//! <div class="flex shrink-0 flex-col">No arbitrary value</div>
//! <div className={size === "sm" ? "h-4" : "h-8"} />
//! ```

use crate::classifier::classify;
use crate::config::Settings;
use crate::diagnostic::Severity;
use crate::scan::{CandidateSource, DiagnosticSink};

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Best practices (`tailwindcss/*`)
    BestPractices,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "tailwindcss/no-template-expression")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

static META: RuleMeta = RuleMeta {
    name: "tailwindcss/no-template-expression",
    description: "Forbid using template expressions in classnames",
    category: RuleCategory::BestPractices,
    fixable: false,
    default_severity: Severity::Warning,
};

/// Forbid template expressions in class names
#[derive(Debug, Clone, Default)]
pub struct NoTemplateExpression {
    settings: Settings,
}

impl NoTemplateExpression {
    #[inline]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn meta() -> &'static RuleMeta {
        &META
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Classify every candidate of `source` and report each offense to `sink`.
    pub fn check(&self, source: &dyn CandidateSource, sink: &mut dyn DiagnosticSink) {
        source.scan(&mut |candidate| {
            for offense in classify(candidate.source) {
                sink.report_offense(candidate.absolute(offense.span()));
            }
        });
    }
}
