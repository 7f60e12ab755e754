//! Start-tag attribute tokenizer for Vue template markup.
//!
//! Only attributes are of interest, so the tokenizer skips text, comments,
//! closing tags and `{{ }}` interpolations, and never builds a tree.

use std::borrow::Cow;

use memchr::{memchr, memchr2, memchr_iter, memmem};

use super::OffsetMap;

/// Longest character reference considered, `&` and `;` included.
const MAX_REFERENCE_LEN: usize = 32;

/// A start-tag attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'t> {
    /// Raw name including directive prefix (`class`, `:class`, `v-bind:class`).
    pub name: &'t str,
    /// Unquoted value, `None` for valueless attributes.
    pub value: Option<&'t str>,
    /// Byte offset of the name in the scanned text.
    pub name_offset: u32,
    /// Byte offset of the first value byte (after the opening quote).
    pub value_offset: u32,
}

/// Iterator over every start-tag attribute in document order.
pub struct AttributeIter<'t> {
    source: &'t str,
    pos: usize,
    in_tag: bool,
    /// Closing tag to skip to once the current start tag ends.
    raw_text_end: Option<&'static str>,
}

impl<'t> AttributeIter<'t> {
    pub fn new(source: &'t str) -> Self {
        Self {
            source,
            pos: 0,
            in_tag: false,
            raw_text_end: None,
        }
    }

    #[inline]
    fn bytes(&self) -> &'t [u8] {
        self.source.as_bytes()
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Advance `pos` past the next occurrence of `needle`, or to the end.
    fn skip_past(&mut self, needle: &[u8]) {
        let bytes = self.bytes();
        self.pos = match memmem::find(&bytes[self.pos..], needle) {
            Some(idx) => self.pos + idx + needle.len(),
            None => bytes.len(),
        };
    }

    fn end_tag(&mut self, len: usize) {
        self.pos += len;
        self.in_tag = false;
        if let Some(end) = self.raw_text_end.take() {
            self.skip_past(end.as_bytes());
        }
    }

    /// Move to the next start tag. Returns `false` at end of input.
    fn enter_next_tag(&mut self) -> bool {
        let bytes = self.bytes();
        loop {
            let Some(idx) = memchr2(b'<', b'{', &bytes[self.pos..]) else {
                self.pos = bytes.len();
                return false;
            };
            let start = self.pos + idx;
            let rest = &bytes[start..];

            if rest.starts_with(b"{{") {
                self.pos = start + 2;
                self.skip_past(b"}}");
            } else if rest.starts_with(b"<!--") {
                self.pos = start + 4;
                self.skip_past(b"-->");
            } else if rest.len() > 1 && rest[0] == b'<' && rest[1].is_ascii_alphabetic() {
                let name_start = start + 1;
                let mut end = name_start;
                while end < bytes.len()
                    && !bytes[end].is_ascii_whitespace()
                    && bytes[end] != b'>'
                    && bytes[end] != b'/'
                {
                    end += 1;
                }
                let tag = &self.source[name_start..end];
                self.raw_text_end = if tag.eq_ignore_ascii_case("script") {
                    Some("</script")
                } else if tag.eq_ignore_ascii_case("style") {
                    Some("</style")
                } else {
                    None
                };
                self.pos = end;
                self.in_tag = true;
                return true;
            } else {
                self.pos = start + 1;
            }
        }
    }
}

impl<'t> Iterator for AttributeIter<'t> {
    type Item = Attribute<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.bytes();
        loop {
            if !self.in_tag && !self.enter_next_tag() {
                return None;
            }

            self.skip_whitespace();
            if self.pos >= bytes.len() {
                return None;
            }
            match bytes[self.pos] {
                b'>' => {
                    self.end_tag(1);
                    continue;
                }
                b'/' if bytes.get(self.pos + 1) == Some(&b'>') => {
                    // Self-closing tags have no raw text.
                    self.raw_text_end = None;
                    self.end_tag(2);
                    continue;
                }
                b'/' | b'=' | b'"' | b'\'' => {
                    self.pos += 1;
                    continue;
                }
                _ => {}
            }

            let name_start = self.pos;
            while self.pos < bytes.len()
                && !bytes[self.pos].is_ascii_whitespace()
                && !matches!(bytes[self.pos], b'=' | b'>' | b'/')
            {
                self.pos += 1;
            }
            let name = &self.source[name_start..self.pos];

            self.skip_whitespace();
            if bytes.get(self.pos) != Some(&b'=') {
                return Some(Attribute {
                    name,
                    value: None,
                    name_offset: name_start as u32,
                    value_offset: self.pos as u32,
                });
            }
            self.pos += 1;
            self.skip_whitespace();

            let (value_start, value_end) = match bytes.get(self.pos) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    let start = self.pos + 1;
                    let end = memchr(quote, &bytes[start..])
                        .map(|i| start + i)
                        .unwrap_or(bytes.len());
                    self.pos = (end + 1).min(bytes.len());
                    (start, end)
                }
                _ => {
                    let start = self.pos;
                    while self.pos < bytes.len()
                        && !bytes[self.pos].is_ascii_whitespace()
                        && bytes[self.pos] != b'>'
                    {
                        self.pos += 1;
                    }
                    (start, self.pos)
                }
            };

            return Some(Attribute {
                name,
                value: Some(&self.source[value_start..value_end]),
                name_offset: name_start as u32,
                value_offset: value_start as u32,
            });
        }
    }
}

/// Decode character references (`&quot;`, `&#39;`, `&#x26;`) in an
/// attribute value, the way Vue does before compiling a binding.
///
/// Returns the text unchanged and no mapping when nothing decodes.
pub fn decode_attribute(value: &str) -> (Cow<'_, str>, Option<OffsetMap>) {
    let bytes = value.as_bytes();
    let mut decoded = String::new();
    let mut mapping = OffsetMap::default();
    let mut run_start = 0;

    for amp in memchr_iter(b'&', bytes) {
        if amp < run_start {
            continue;
        }
        let window = &bytes[amp..bytes.len().min(amp + MAX_REFERENCE_LEN)];
        let Some(semi) = memchr(b';', window) else {
            continue;
        };
        let body = &window[1..semi];
        if body.is_empty() || !body.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'#') {
            continue;
        }
        let reference = &value[amp..=amp + semi];
        let unescaped = htmlize::unescape_attribute(reference);
        if unescaped == reference {
            continue;
        }

        if run_start == 0 && decoded.is_empty() {
            decoded.reserve(value.len());
            mapping.push(0, 0);
        }
        decoded.push_str(&value[run_start..amp]);
        mapping.push(decoded.len(), amp);
        decoded.push_str(&unescaped);
        run_start = amp + semi + 1;
        mapping.push(decoded.len(), run_start);
    }

    if run_start == 0 {
        return (Cow::Borrowed(value), None);
    }
    decoded.push_str(&value[run_start..]);
    (Cow::Owned(decoded), Some(mapping))
}
