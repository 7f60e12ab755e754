//! # vize_stencil
//!
//! Stencil - The class name checker for Vize.
//! Detects template expressions in Tailwind CSS class names.
//!
//! ## Name Origin
//!
//! A **stencil** is a cut sheet used to paint the same letters again and
//! again. Tailwind CSS only generates the class names it can read whole in
//! the source, so every class must be cut out in full, never assembled at
//! runtime. `vize_stencil` finds the places where a class name is pieced
//! together from a template literal.
//!
//! ## Features
//!
//! - JSX/TSX `class` / `className` attributes
//! - Configured helper calls (`classnames(...)`, `cn(...)`) and tagged
//!   templates (`` ctl`...` ``)
//! - Vue SFC `:class` bindings and `<script>` blocks
//! - Rich diagnostic output with code snippets (like oxlint), or JSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vize_stencil::{Linter, OutputFormat, Settings, format_results};
//!
//! let linter = Linter::with_settings(Settings::default().with_callees(["classnames"]));
//! let source = "<div className={classnames(`w-${size}`)} />";
//! let result = linter.lint_file(source, "App.jsx");
//!
//! if result.has_diagnostics() {
//!     let output = format_results(&[result], &[("App.jsx".to_string(), source.to_string())], OutputFormat::Text);
//!     println!("{}", output);
//! }
//! ```
//!
//! ## Rules
//!
//! - `tailwindcss/no-template-expression` - Forbid using template expressions in classnames

pub mod classifier;
pub mod config;
mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod scan;
pub mod sfc;

pub use classifier::{classify, ClassSource, Offense};
pub use config::{ConfigError, RuleOptions, Settings, StencilConfig, TailwindConfig};
pub use context::LintContext;
pub use diagnostic::{LintDiagnostic, LintSummary, MessageId, Severity};
pub use linter::{FileKind, LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{NoTemplateExpression, RuleCategory, RuleMeta};

/// Lint a source file with default settings
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::with_settings()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_file(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_function() {
        let result = lint("<div class={`w-${dada}`}>Template literal!</div>", "test.jsx");
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].rule_name, "tailwindcss/no-template-expression");
    }

    #[test]
    fn test_lint_clean_source() {
        let result = lint(r#"<div class="flex shrink-0 flex-col">No arbitrary value</div>"#, "test.jsx");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_linter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Linter>();
    }
}
