//! Vue SFC block splitting.
//!
//! Locates the top-level `<template>` block and every `<script>` block with
//! their byte offsets, so diagnostics found inside a block map back to the
//! original file.

use memchr::{memchr, memmem};
use oxc_span::SourceType;

use crate::scan::AttributeIter;

/// A top-level SFC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfcBlock<'s> {
    /// Block content between the opening and closing tags.
    pub content: &'s str,
    /// Byte offset of `content` in the file.
    pub offset: u32,
    /// `lang` attribute of the opening tag.
    pub lang: Option<&'s str>,
}

impl SfcBlock<'_> {
    /// Source type for a script block, from its `lang` attribute.
    pub fn source_type(&self) -> SourceType {
        match self.lang {
            Some("ts") => SourceType::ts(),
            Some("tsx") => SourceType::tsx(),
            Some("jsx") => SourceType::jsx(),
            _ => SourceType::mjs(),
        }
    }
}

/// Blocks of one SFC.
#[derive(Debug, Default)]
pub struct SfcBlocks<'s> {
    pub template: Option<SfcBlock<'s>>,
    pub scripts: Vec<SfcBlock<'s>>,
}

/// Split an SFC into its template and script blocks.
///
/// A block whose closing tag is missing is skipped; scanning resumes right
/// after its `<`.
pub fn split_sfc(source: &str) -> SfcBlocks<'_> {
    let bytes = source.as_bytes();
    let mut blocks = SfcBlocks::default();
    let mut pos = 0;

    while let Some(idx) = memchr(b'<', &bytes[pos..]) {
        let start = pos + idx;
        let rest = &bytes[start..];

        if rest.starts_with(b"<!--") {
            pos = skip_past(bytes, start, b"-->");
        } else if is_open_tag(rest, b"script") {
            match read_block(source, start, b"script") {
                Some((block, end)) => {
                    blocks.scripts.push(block);
                    pos = end;
                }
                None => pos = start + 1,
            }
        } else if is_open_tag(rest, b"style") {
            pos = find_close_tag(bytes, start, b"style").map_or(bytes.len(), |(_, end)| end);
        } else if blocks.template.is_none() && is_open_tag(rest, b"template") {
            match read_template(source, start) {
                Some((block, end)) => {
                    blocks.template = Some(block);
                    pos = end;
                }
                None => pos = start + 1,
            }
        } else {
            pos = start + 1;
        }
    }

    blocks
}

/// Whether `rest` starts with `<name` followed by whitespace, `>` or `/`.
fn is_open_tag(rest: &[u8], name: &[u8]) -> bool {
    rest.len() > name.len() + 1
        && rest[1..=name.len()].eq_ignore_ascii_case(name)
        && matches!(rest[name.len() + 1], b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')
}

/// Length of the `</name>` tag at the start of `rest`.
///
/// The name matches case-insensitively and whitespace may precede `>`.
fn close_tag_len(rest: &[u8], name: &[u8]) -> Option<usize> {
    if rest.len() < name.len() + 3
        || !rest.starts_with(b"</")
        || !rest[2..2 + name.len()].eq_ignore_ascii_case(name)
    {
        return None;
    }
    let mut end = 2 + name.len();
    while end < rest.len() && rest[end].is_ascii_whitespace() {
        end += 1;
    }
    (rest.get(end) == Some(&b'>')).then_some(end + 1)
}

/// Next `</name>` at or after `from`, as `(tag_start, tag_end)`.
fn find_close_tag(bytes: &[u8], from: usize, name: &[u8]) -> Option<(usize, usize)> {
    let finder = memmem::Finder::new(b"</");
    let mut pos = from;
    while let Some(idx) = finder.find(&bytes[pos..]) {
        let start = pos + idx;
        if let Some(len) = close_tag_len(&bytes[start..], name) {
            return Some((start, start + len));
        }
        pos = start + 2;
    }
    None
}

fn skip_past(bytes: &[u8], from: usize, needle: &[u8]) -> usize {
    memmem::find(&bytes[from..], needle)
        .map(|i| from + i + needle.len())
        .unwrap_or(bytes.len())
}

/// Parse the opening tag at `start`. Returns `(lang, content_start)`.
fn open_tag(source: &str, start: usize) -> Option<(Option<&str>, usize)> {
    let tag_end = start + memchr(b'>', &source.as_bytes()[start..])?;
    let lang = AttributeIter::new(&source[start..=tag_end])
        .find(|attr| attr.name == "lang")
        .and_then(|attr| attr.value);
    Some((lang, tag_end + 1))
}

fn read_block<'s>(source: &'s str, start: usize, name: &[u8]) -> Option<(SfcBlock<'s>, usize)> {
    let (lang, content_start) = open_tag(source, start)?;
    let (content_end, end) = find_close_tag(source.as_bytes(), content_start, name)?;
    let block = SfcBlock {
        content: &source[content_start..content_end],
        offset: content_start as u32,
        lang,
    };
    Some((block, end))
}

/// Read the root template, matching nested `<template>` tags by depth.
fn read_template(source: &str, start: usize) -> Option<(SfcBlock<'_>, usize)> {
    let bytes = source.as_bytes();
    let (lang, content_start) = open_tag(source, start)?;

    let mut depth = 1usize;
    let mut pos = content_start;
    while let Some(idx) = memchr(b'<', &bytes[pos..]) {
        let at = pos + idx;
        let rest = &bytes[at..];
        if is_open_tag(rest, b"template") {
            let tag_end = at + memchr(b'>', rest)?;
            if bytes[tag_end - 1] != b'/' {
                depth += 1;
            }
            pos = tag_end + 1;
        } else if let Some(len) = close_tag_len(rest, b"template") {
            depth -= 1;
            if depth == 0 {
                let block = SfcBlock {
                    content: &source[content_start..at],
                    offset: content_start as u32,
                    lang,
                };
                return Some((block, at + len));
            }
            pos = at + len;
        } else {
            pos = at + 1;
        }
    }
    None
}
