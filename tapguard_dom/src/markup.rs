// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup helpers: serialization and plain-text extraction.
//!
//! This is not an HTML parser. Leaf markup is stored verbatim and only
//! scanned to strip tags and decode the handful of entities that commonly
//! appear in button labels.

use alloc::string::String;

use crate::types::Element;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Write the opening tag of `el` (with attributes) into `out`.
pub(crate) fn open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attribute(value, out);
        out.push('"');
    }
    out.push('>');
}

/// Write the closing tag of `el` into `out`; void elements have none.
pub(crate) fn close_tag(el: &Element, out: &mut String) {
    if is_void(&el.tag) {
        return;
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Plain text of a markup fragment: tags removed, basic entities decoded.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(c) = rest.chars().next() {
        match c {
            '<' => match rest.find('>') {
                Some(end) => rest = &rest[end + 1..],
                // Unterminated tag: the remainder is markup, not text.
                None => break,
            },
            '&' => {
                let (decoded, len) = decode_entity(rest);
                out.push(decoded);
                rest = &rest[len..];
            }
            _ => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn decode_entity(s: &str) -> (char, usize) {
    const ENTITIES: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&apos;", '\''),
        ("&nbsp;", '\u{a0}'),
    ];
    ENTITIES
        .iter()
        .find(|(name, _)| s.starts_with(name))
        .map(|(name, c)| (*c, name.len()))
        .unwrap_or(('&', 1))
}
