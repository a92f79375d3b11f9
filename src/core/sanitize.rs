// src/core/sanitize.rs
use std::borrow::Cow;

use markup5ever::data::{C1_REPLACEMENTS, NAMED_ENTITIES};

/// Longest run of name characters looked at after an `&`.
const MAX_ENTITY_LEN: usize = 32;

/// Characters that end an entity name.
fn ends_name(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0c' | ' ' | '<' | '&' | '#' | ';')
}

/// HTML5 named reference, `key` without the leading `&`. The table also
/// carries every prefix of every name, marked with a zero code point.
fn named_entity(key: &str) -> Option<(char, Option<char>)> {
    let &(first, second) = NAMED_ENTITIES.get(key)?;
    if first == 0 {
        return None;
    }
    let first = char::from_u32(first)?;
    Some((first, char::from_u32(second).filter(|&c| c != '\0')))
}

/// `&#NN;` / `&#xHH;` with the HTML5 repairs: NUL, surrogates and
/// out-of-range values become U+FFFD, C1 controls go through the
/// Windows-1252 remap, other forbidden code points vanish.
fn numeric_entity(code: u32) -> Option<char> {
    if code == 0 || (0xD800..=0xDFFF).contains(&code) || code > 0x10FFFF {
        return Some('\u{fffd}');
    }
    if (0x80..=0x9F).contains(&code) {
        return C1_REPLACEMENTS[(code - 0x80) as usize].or(char::from_u32(code));
    }
    let forbidden = matches!(code, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF)
        || code & 0xFFFE == 0xFFFE;
    if forbidden {
        return None;
    }
    char::from_u32(code)
}

/// Parse the digits of a numeric reference. Returns the code point (saturated
/// on overflow) and the bytes used, `;` included when present.
fn numeric_body(tail: &str) -> Option<(u32, usize)> {
    let (radix, digits_at) = match tail.as_bytes().first() {
        Some(b'x' | b'X') => (16, 1),
        _ => (10, 0),
    };
    let digits = &tail[digits_at..];
    let len = digits
        .bytes()
        .take_while(|&b| (b as char).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }
    let code = u32::from_str_radix(&digits[..len], radix).unwrap_or(u32::MAX);
    let used = digits_at + len + usize::from(digits[len..].starts_with(';'));
    Some((code, used))
}

/// Decode character references the way an HTML5 parser does for text and
/// attribute values: named references from the full table (legacy names work
/// without the `;`, longest prefix first), decimal and hex references with or
/// without `;`. Anything unrecognised is kept verbatim.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        let used = match tail.strip_prefix('#') {
            Some(num) => numeric_body(num).map(|(code, used)| {
                out.extend(numeric_entity(code));
                used + 1
            }),
            None => decode_named(tail, &mut out),
        };

        match used {
            Some(used) => rest = &tail[used..],
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Push the replacement for the named reference at the start of `tail` and
/// return how many bytes of `tail` it consumed.
fn decode_named(tail: &str, out: &mut String) -> Option<usize> {
    let name_len: usize = tail
        .chars()
        .take_while(|&c| !ends_name(c))
        .take(MAX_ENTITY_LEN)
        .map(char::len_utf8)
        .sum();
    if name_len == 0 {
        return None;
    }
    let key_len = name_len + usize::from(tail[name_len..].starts_with(';'));
    let key = &tail[..key_len];

    // Whole key first, then ever shorter prefixes of at least two chars.
    let candidates = std::iter::once(key_len).chain(
        key.char_indices()
            .map(|(i, _)| i)
            .skip(2)
            .collect::<Vec<_>>()
            .into_iter()
            .rev(),
    );
    for end in candidates {
        if let Some((first, second)) = named_entity(&key[..end]) {
            out.push(first);
            out.extend(second);
            return Some(end);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(decode_entities("Doi Suthep"), Cow::Borrowed(_)));
    }

    #[test]
    fn named_and_numeric_references() {
        assert_eq!(decode_entities("Run &amp; Ride"), "Run & Ride");
        assert_eq!(decode_entities("A&nbsp;B"), "A\u{a0}B");
        assert_eq!(decode_entities("&#65;&#x42;&#X43;"), "ABC");
        assert_eq!(decode_entities("&#0;"), "\u{fffd}");
    }

    #[test]
    fn full_html5_name_table() {
        assert_eq!(decode_entities("Caf&eacute; Run"), "Café Run");
        assert_eq!(decode_entities("&thinsp;&rarr;&hearts;"), "\u{2009}\u{2192}\u{2665}");
        assert_eq!(decode_entities("&NotEqualTilde;"), "\u{2242}\u{338}");
    }

    #[test]
    fn legacy_names_without_semicolon() {
        assert_eq!(decode_entities("&amp"), "&");
        assert_eq!(decode_entities("Caf&eacute; Run &amp Ride"), "Café Run & Ride");
        assert_eq!(decode_entities("&nbspX"), "\u{a0}X");
        assert_eq!(decode_entities("I'm &notit; I tell you"), "I'm \u{ac}it; I tell you");
    }

    #[test]
    fn numeric_repairs() {
        assert_eq!(decode_entities("&#65 B"), "A B");
        assert_eq!(decode_entities("&#x80;"), "\u{20ac}");
        assert_eq!(decode_entities("&#xD800;"), "\u{fffd}");
        assert_eq!(decode_entities("&#99999999999;"), "\u{fffd}");
        assert_eq!(decode_entities("a&#1;b"), "ab");
    }

    #[test]
    fn unknown_or_bare_ampersands_survive() {
        assert_eq!(decode_entities("R&D"), "R&D");
        assert_eq!(decode_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&#;&#x;"), "&#;&#x;");
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn multibyte_text_around_references() {
        assert_eq!(decode_entities("เชียงใหม่ &amp; ลำพูน"), "เชียงใหม่ & ลำพูน");
        assert_eq!(decode_entities("&ลำพูน;"), "&ลำพูน;");
    }
}
