//! Main linter entry point.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::config::Settings;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary, Severity};
use crate::rule::NoTemplateExpression;
use crate::scan::{ScriptScanner, TemplateScanner};
use crate::sfc::split_sfc;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    fn empty(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    fn from_context(ctx: LintContext<'_>) -> Self {
        let filename = ctx.filename.to_string();
        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        Self {
            filename,
            diagnostics: ctx.into_diagnostics(),
            error_count,
            warning_count,
        }
    }

    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Kind of file, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Sfc,
    Script(SourceType),
}

impl FileKind {
    /// Detect from a file name. `None` for files the linter does not handle.
    ///
    /// Plain JavaScript files (`.js`, `.mjs`, `.cjs`) are parsed with JSX
    /// enabled, since React projects commonly keep components in `.js`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = Path::new(path);
        if path.extension().is_some_and(|ext| ext == "vue") {
            return Some(Self::Sfc);
        }
        let source_type = SourceType::from_path(path).ok()?;
        let source_type = if source_type.is_javascript() {
            source_type.with_jsx(true)
        } else {
            source_type
        };
        Some(Self::Script(source_type))
    }
}

/// Main linter struct.
///
/// Holds resolved settings; each lint call parses into its own arena, so a
/// linter can be shared across threads.
#[derive(Debug, Clone)]
pub struct Linter {
    rule: NoTemplateExpression,
    severity: Severity,
}

impl Linter {
    /// Create a new linter with default settings
    #[inline]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[inline]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            rule: NoTemplateExpression::new(settings),
            severity: NoTemplateExpression::meta().default_severity,
        }
    }

    /// Set the severity of reported diagnostics
    #[inline]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        self.rule.settings()
    }

    fn context<'s>(&self, source: &'s str, filename: &'s str) -> LintContext<'s> {
        LintContext::new(source, filename, NoTemplateExpression::meta().name, self.severity)
    }

    /// Lint a file, choosing the parser from its extension.
    pub fn lint_file(&self, source: &str, filename: &str) -> LintResult {
        match FileKind::from_path(filename) {
            Some(FileKind::Sfc) => self.lint_sfc(source, filename),
            Some(FileKind::Script(source_type)) => self.lint_script(source, filename, source_type),
            None => {
                tracing::debug!(filename, "unsupported file type, skipping");
                LintResult::empty(filename)
            }
        }
    }

    /// Lint a JS/TS/JSX/TSX program
    pub fn lint_script(&self, source: &str, filename: &str, source_type: SourceType) -> LintResult {
        let mut ctx = self.context(source, filename);
        self.check_script(&mut ctx, source, 0, source_type);
        LintResult::from_context(ctx)
    }

    /// Lint Vue template markup
    pub fn lint_template(&self, source: &str, filename: &str) -> LintResult {
        let mut ctx = self.context(source, filename);
        let scanner = TemplateScanner::new(source, self.settings());
        self.rule.check(&scanner, &mut ctx);
        LintResult::from_context(ctx)
    }

    /// Lint a full Vue SFC file
    ///
    /// The template and every script block are linted; offsets refer to the
    /// whole file.
    pub fn lint_sfc(&self, source: &str, filename: &str) -> LintResult {
        let blocks = split_sfc(source);
        let mut ctx = self.context(source, filename);

        if let Some(template) = blocks.template {
            let scanner =
                TemplateScanner::new(template.content, self.settings()).with_offset(template.offset);
            self.rule.check(&scanner, &mut ctx);
        }
        for script in &blocks.scripts {
            self.check_script(&mut ctx, script.content, script.offset, script.source_type());
        }

        LintResult::from_context(ctx)
    }

    fn check_script(
        &self,
        ctx: &mut LintContext<'_>,
        source: &str,
        offset: u32,
        source_type: SourceType,
    ) {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();

        if ret.panicked {
            tracing::warn!(filename = ctx.filename, "failed to parse script, skipping");
            return;
        }
        if !ret.errors.is_empty() {
            tracing::debug!(
                filename = ctx.filename,
                errors = ret.errors.len(),
                "script has parse errors, linting recovered program"
            );
        }

        let scanner = ScriptScanner::new(&ret.program, self.settings()).with_offset(offset);
        self.rule.check(&scanner, ctx);
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint_file(source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
