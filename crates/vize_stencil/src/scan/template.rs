//! Candidate discovery in Vue template markup.

use oxc_allocator::Allocator;
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::SourceType;

use super::markup::{decode_attribute, AttributeIter};
use super::script::CandidateCollector;
use super::{Candidate, CandidateSource};
use crate::config::Settings;

/// Finds class bindings in a Vue template.
///
/// Static attributes (`class="..."`) are plain strings and never candidates.
/// Bindings (`:class="..."`, `v-bind:class="..."`) have their character
/// references decoded and are parsed as TypeScript expressions; the parsed expression is a candidate, and configured calls and
/// tagged templates inside it are candidates too.
pub struct TemplateScanner<'t> {
    source: &'t str,
    settings: &'t Settings,
    offset: u32,
}

impl<'t> TemplateScanner<'t> {
    #[inline]
    pub fn new(source: &'t str, settings: &'t Settings) -> Self {
        Self {
            source,
            settings,
            offset: 0,
        }
    }

    /// Byte offset of the template text inside the linted file.
    #[inline]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl CandidateSource for TemplateScanner<'_> {
    fn scan(&self, visit: &mut dyn FnMut(Candidate<'_, '_>)) {
        for attr in AttributeIter::new(self.source) {
            let Some(argument) = bound_argument(attr.name) else {
                continue;
            };
            if !self.settings.is_class_attribute(argument) {
                continue;
            }
            let Some(value) = attr.value else {
                continue;
            };

            let (text, mapping) = decode_attribute(value);
            let allocator = Allocator::default();
            let expr = match Parser::new(&allocator, &text, SourceType::ts()).parse_expression() {
                Ok(expr) => expr,
                Err(errors) => {
                    tracing::warn!(
                        attribute = attr.name,
                        offset = self.offset + attr.value_offset,
                        errors = errors.len(),
                        "skipping class binding that does not parse"
                    );
                    continue;
                }
            };

            let offset = self.offset + attr.value_offset;
            let mapping = mapping.as_ref();
            visit(Candidate::new(&expr, offset).with_mapping(mapping));
            CandidateCollector::new(self.settings, offset, &mut *visit)
                .with_mapping(mapping)
                .visit_expression(&expr);
        }
    }
}

/// Argument of a `v-bind` directive (`:class` / `v-bind:class.prop` -> `class`).
///
/// Returns `None` for plain attributes, other directives, object-form
/// `v-bind="..."` and dynamic arguments (`:[name]`).
fn bound_argument(name: &str) -> Option<&str> {
    let argument = name
        .strip_prefix(':')
        .or_else(|| name.strip_prefix("v-bind:"))?;
    let argument = argument.split('.').next().unwrap_or(argument);
    if argument.is_empty() || argument.starts_with('[') {
        return None;
    }
    Some(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn offenses(source: &str, settings: &Settings) -> Vec<String> {
        let mut found = Vec::new();
        TemplateScanner::new(source, settings).scan(&mut |candidate| {
            for offense in classify(candidate.source) {
                let span = candidate.absolute(offense.span());
                found.push(source[span.start as usize..span.end as usize].to_string());
            }
        });
        found
    }

    #[test]
    fn test_bound_argument() {
        assert_eq!(bound_argument(":class"), Some("class"));
        assert_eq!(bound_argument("v-bind:class"), Some("class"));
        assert_eq!(bound_argument(":class.prop"), Some("class"));
        assert_eq!(bound_argument("class"), None);
        assert_eq!(bound_argument("v-bind"), None);
        assert_eq!(bound_argument(":[attr]"), None);
        assert_eq!(bound_argument("@click"), None);
    }

    #[test]
    fn test_static_class_ignored() {
        let settings = Settings::default();
        assert!(offenses(r#"<div class="flex shrink-0 flex-col">x</div>"#, &settings).is_empty());
    }

    #[test]
    fn test_bound_class_template_literal() {
        let settings = Settings::default();
        let source = r#"<div :class="`bg-${bg} text-${text}`"></div>"#;
        assert_eq!(offenses(source, &settings), vec!["bg", "text"]);
    }

    #[test]
    fn test_v_bind_long_form_and_object() {
        let settings = Settings::default();
        let source = r#"<div v-bind:class="[base, { [`h-${h}`]: big }]" :style="`w-${w}`"></div>"#;
        assert_eq!(offenses(source, &settings), vec!["h"]);
    }

    #[test]
    fn test_configured_call_in_binding() {
        let settings = Settings::default().with_callees(["cns"]);
        let source = r#"<nav :class="cns('flex', { 'p-1': !size, [`h-${width}`]: size === 'sm' })" />"#;
        assert_eq!(offenses(source, &settings), vec!["width"]);
    }

    #[test]
    fn test_unparsable_binding_skipped() {
        let settings = Settings::default();
        let source = r#"<div :class="`a-${"></div><p :class="`b-${b}`"></p>"#;
        assert_eq!(offenses(source, &settings), vec!["b"]);
    }

    #[test]
    fn test_entity_encoded_binding() {
        let settings = Settings::default();
        let source = r#"<div :class="[&quot;flex&quot;, `w-${w}`, on &amp;&amp; `h-${h}`]"></div>"#;
        assert_eq!(offenses(source, &settings), vec!["w", "h"]);
    }

    #[test]
    fn test_entity_encoded_callee_argument() {
        let settings = Settings::default().with_callees(["cn"]);
        let source = r#"<p :class="cn(&#39;p-2&#39;, `m-${m}`)" />"#;
        assert_eq!(offenses(source, &settings), vec!["m"]);
    }

    #[test]
    fn test_template_offset() {
        let settings = Settings::default();
        let source = r#"<i :class="`x-${y}`" />"#;
        let mut spans = Vec::new();
        TemplateScanner::new(source, &settings)
            .with_offset(10)
            .scan(&mut |candidate| {
                for offense in classify(candidate.source) {
                    spans.push(candidate.absolute(offense.span()));
                }
            });
        let at = source.find("y}").unwrap() as u32 + 10;
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (at, at + 1));
    }
}
