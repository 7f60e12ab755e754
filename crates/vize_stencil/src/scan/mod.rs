//! Candidate discovery.
//!
//! Scanners walk a parsed file and hand every class-producing node to a
//! callback. They decide *where* class names are built; the classifier decides
//! *whether* they are dynamic.
//!
//! - [`ScriptScanner`] - JSX `class`/`className` attributes, configured calls
//!   and tagged templates in JS/TS programs
//! - [`TemplateScanner`] - `:class` bindings in Vue templates

mod markup;
mod script;
mod template;

pub use markup::{decode_attribute, Attribute, AttributeIter};
pub use script::ScriptScanner;
pub use template::TemplateScanner;

use oxc_span::Span;

use crate::classifier::ClassSource;

/// A node to classify, with the byte offset of the text it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'b, 'a> {
    pub source: ClassSource<'b, 'a>,
    /// Added to every span found under `source`.
    pub offset: u32,
    /// Set when the parsed text was decoded from the raw source.
    pub mapping: Option<&'b OffsetMap>,
}

impl<'b, 'a> Candidate<'b, 'a> {
    #[inline]
    pub fn new(source: impl Into<ClassSource<'b, 'a>>, offset: u32) -> Self {
        Self {
            source: source.into(),
            offset,
            mapping: None,
        }
    }

    #[inline]
    pub fn with_mapping(mut self, mapping: Option<&'b OffsetMap>) -> Self {
        self.mapping = mapping;
        self
    }

    /// Shift a span relative to the parsed text into file coordinates.
    #[inline]
    pub fn absolute(&self, span: Span) -> Span {
        let to_file = |pos: u32| self.mapping.map_or(pos, |m| m.raw(pos)) + self.offset;
        Span::new(to_file(span.start), to_file(span.end))
    }
}

/// Maps positions in decoded text back to the raw text it came from.
///
/// Each segment starts a run where both texts advance together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetMap {
    /// `(decoded_start, raw_start)`, sorted by both.
    segments: Vec<(u32, u32)>,
}

impl OffsetMap {
    #[inline]
    pub(crate) fn push(&mut self, decoded: usize, raw: usize) {
        self.segments.push((decoded as u32, raw as u32));
    }

    /// Raw position of a decoded position.
    pub fn raw(&self, pos: u32) -> u32 {
        let idx = self.segments.partition_point(|&(decoded, _)| decoded <= pos);
        match idx.checked_sub(1).map(|i| self.segments[i]) {
            Some((decoded, raw)) => raw + (pos - decoded),
            None => pos,
        }
    }
}

/// Produces the candidate nodes of one file.
pub trait CandidateSource {
    /// Call `visit` once per candidate, in document order.
    fn scan(&self, visit: &mut dyn FnMut(Candidate<'_, '_>));
}

/// Receives offending spans in file coordinates.
pub trait DiagnosticSink {
    fn report_offense(&mut self, span: Span);
}

impl DiagnosticSink for Vec<Span> {
    #[inline]
    fn report_offense(&mut self, span: Span) {
        self.push(span);
    }
}
