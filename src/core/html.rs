// src/core/html.rs
// Single-pass HTML event walker. No DOM is built: the visitor sees open tags,
// text runs and close tags in document order and keeps whatever state it needs.
//
// Tolerances:
// - tag and attribute names are lower-cased, attribute values entity-decoded
// - comments, <!doctype …> and <? … ?> are skipped
// - <script>/<style> bodies arrive as one raw text event
// - `<x … />` is an open event immediately followed by a close event
// - a '<' that cannot start a tag is plain text

use super::sanitize::decode_entities;

/// An opening tag with its attributes in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: Vec<(String, Option<String>)>,
}

impl StartTag {
    /// Value of `name`; the last occurrence wins. Valueless attributes give `None`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
    }
}

pub trait TagVisitor {
    fn start_tag(&mut self, _tag: &StartTag) {}
    fn text(&mut self, _text: &str) {}
    fn end_tag(&mut self, _name: &str) {}
}

/// Walk `doc` once, front to back, reporting events to `visitor`.
pub fn walk<V: TagVisitor + ?Sized>(doc: &str, visitor: &mut V) {
    let b = doc.as_bytes();
    let n = b.len();
    let mut i = 0usize;
    let mut text_start = 0usize;

    while i < n {
        // '<' is ASCII, so it never matches inside a multi-byte char
        if b[i] != b'<' {
            i += 1;
            continue;
        }

        match b.get(i + 1).copied() {
            Some(b'!') | Some(b'?') => {
                flush_text(doc, text_start, i, visitor);
                let end = if doc[i..].starts_with("<!--") {
                    doc[i + 4..].find("-->").map(|e| i + 4 + e + 3)
                } else {
                    doc[i..].find('>').map(|e| i + e + 1)
                };
                // Unterminated markup declaration swallows the rest.
                i = end.unwrap_or(n);
                text_start = i;
            }
            Some(b'/') if b.get(i + 2).is_some_and(u8::is_ascii_alphabetic) => {
                let Some(end) = scan_tag_end(b, i) else { break };
                flush_text(doc, text_start, i, visitor);
                let inner = &doc[i + 2..end - 1];
                let name_end = inner
                    .find(|c: char| c.is_ascii_whitespace() || c == '/')
                    .unwrap_or(inner.len());
                visitor.end_tag(&inner[..name_end].to_ascii_lowercase());
                i = end;
                text_start = end;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let Some(end) = scan_tag_end(b, i) else { break };
                flush_text(doc, text_start, i, visitor);
                let (tag, self_closing) = parse_start_tag(&doc[i + 1..end - 1]);
                visitor.start_tag(&tag);
                i = end;
                text_start = end;

                if self_closing {
                    visitor.end_tag(&tag.name);
                } else if tag.name == "script" || tag.name == "style" {
                    let close = format!("</{}", tag.name);
                    let raw_end = find_ignore_case(b, i, close.as_bytes()).unwrap_or(n);
                    if raw_end > i {
                        visitor.text(&doc[i..raw_end]);
                    }
                    i = raw_end;
                    text_start = raw_end;
                }
            }
            _ => i += 1,
        }
    }

    // Trailing text, including any unterminated tag.
    flush_text(doc, text_start, n, visitor);
}

/// First index at or after `from` where `needle` (ASCII) starts, ignoring case.
fn find_ignore_case(b: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    b[from..]
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|p| from + p)
}

fn flush_text<V: TagVisitor + ?Sized>(doc: &str, start: usize, end: usize, visitor: &mut V) {
    if start < end {
        visitor.text(&decode_entities(&doc[start..end]));
    }
}

/// Index just past the '>' closing the tag that starts at `start`.
/// Quotes only count when they open an attribute value (`=` before them).
fn scan_tag_end(b: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    let mut quote: Option<u8> = None;
    let mut after_eq = false;

    while i < b.len() {
        let c = b[i];
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                b'>' => return Some(i + 1),
                b'"' | b'\'' if after_eq => {
                    quote = Some(c);
                    after_eq = false;
                }
                b'=' => after_eq = true,
                c if c.is_ascii_whitespace() => {}
                _ => after_eq = false,
            },
        }
        i += 1;
    }
    None
}

fn parse_start_tag(inner: &str) -> (StartTag, bool) {
    let (body, self_closing) = match inner.strip_suffix('/') {
        Some(body) => (body, true),
        None => (inner, false),
    };
    let name_end = body
        .find(|c: char| c.is_ascii_whitespace() || c == '/')
        .unwrap_or(body.len());

    let tag = StartTag {
        name: body[..name_end].to_ascii_lowercase(),
        attrs: parse_attrs(&body[name_end..]),
    };
    (tag, self_closing)
}

fn parse_attrs(s: &str) -> Vec<(String, Option<String>)> {
    let b = s.as_bytes();
    let n = b.len();
    let mut out = Vec::new();
    let mut i = 0usize;

    loop {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        if i >= n {
            break;
        }

        // First byte always belongs to the name so the loop makes progress.
        let name_start = i;
        i += 1;
        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'/' {
            i += 1;
        }
        let name = s[name_start..i].to_ascii_lowercase();

        let mut j = i;
        while j < n && b[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= n || b[j] != b'=' {
            out.push((name, None));
            continue;
        }

        j += 1;
        while j < n && b[j].is_ascii_whitespace() {
            j += 1;
        }
        let value = if j < n && (b[j] == b'"' || b[j] == b'\'') {
            let q = b[j] as char;
            let vs = j + 1;
            let ve = s[vs..].find(q).map_or(n, |e| vs + e);
            i = (ve + 1).min(n);
            &s[vs..ve]
        } else {
            let vs = j;
            while j < n && !b[j].is_ascii_whitespace() {
                j += 1;
            }
            i = j;
            &s[vs..j]
        };
        out.push((name, Some(decode_entities(value).into_owned())));
    }
    out
}
