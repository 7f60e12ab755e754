//! Candidate discovery in JS/TS programs.

use oxc_ast::ast::{
    CallExpression, Expression, JSXAttribute, JSXAttributeName, JSXAttributeValue, Program,
    TaggedTemplateExpression,
};
use oxc_ast_visit::{walk, Visit};

use super::{Candidate, CandidateSource, OffsetMap};
use crate::classifier::ClassSource;
use crate::config::Settings;

/// Finds class-producing nodes in a parsed program.
///
/// - JSX attributes whose name matches the class regex, unless the value is a
///   plain string
/// - every argument of a call to a configured callee
/// - the quasi of a template tagged with a configured tag
///
/// Matching is exact on identifier names; member callees never match.
pub struct ScriptScanner<'p, 'a> {
    program: &'p Program<'a>,
    settings: &'p Settings,
    offset: u32,
}

impl<'p, 'a> ScriptScanner<'p, 'a> {
    #[inline]
    pub fn new(program: &'p Program<'a>, settings: &'p Settings) -> Self {
        Self {
            program,
            settings,
            offset: 0,
        }
    }

    /// Byte offset of the program text inside the linted file (SFC script blocks).
    #[inline]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl CandidateSource for ScriptScanner<'_, '_> {
    fn scan(&self, visit: &mut dyn FnMut(Candidate<'_, '_>)) {
        let mut collector = CandidateCollector::new(self.settings, self.offset, visit);
        collector.visit_program(self.program);
    }
}

/// AST visitor forwarding candidates to a callback.
///
/// The walk continues below matched nodes, so a configured call nested inside
/// a class attribute or another call is a candidate of its own.
pub(super) struct CandidateCollector<'s, 'v> {
    settings: &'s Settings,
    offset: u32,
    mapping: Option<&'s OffsetMap>,
    visit: &'v mut dyn FnMut(Candidate<'_, '_>),
}

impl<'s, 'v> CandidateCollector<'s, 'v> {
    pub(super) fn new(
        settings: &'s Settings,
        offset: u32,
        visit: &'v mut dyn FnMut(Candidate<'_, '_>),
    ) -> Self {
        Self {
            settings,
            offset,
            mapping: None,
            visit,
        }
    }

    /// Positions of the visited text come from decoded source.
    #[inline]
    pub(super) fn with_mapping(mut self, mapping: Option<&'s OffsetMap>) -> Self {
        self.mapping = mapping;
        self
    }

    #[inline]
    fn emit(&mut self, source: ClassSource<'_, '_>) {
        (self.visit)(Candidate::new(source, self.offset).with_mapping(self.mapping));
    }
}

impl<'a> Visit<'a> for CandidateCollector<'_, '_> {
    fn visit_jsx_attribute(&mut self, attr: &JSXAttribute<'a>) {
        if let JSXAttributeName::Identifier(name) = &attr.name {
            if self.settings.is_class_attribute(name.name.as_str()) {
                match &attr.value {
                    // Static values are known to be safe.
                    None | Some(JSXAttributeValue::StringLiteral(_)) => {}
                    Some(value) => self.emit(ClassSource::JsxValue(value)),
                }
            }
        }
        walk::walk_jsx_attribute(self, attr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Expression::Identifier(callee) = &call.callee {
            if self.settings.is_callee(callee.name.as_str()) {
                for arg in call.arguments.iter() {
                    self.emit(ClassSource::Argument(arg));
                }
            }
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_tagged_template_expression(&mut self, tagged: &TaggedTemplateExpression<'a>) {
        if let Expression::Identifier(tag) = &tagged.tag {
            if self.settings.is_tag(tag.name.as_str()) {
                self.emit(ClassSource::Template(&tagged.quasi));
            }
        }
        walk::walk_tagged_template_expression(self, tagged);
    }
}
