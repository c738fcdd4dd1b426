// Licensed under the Apache-2.0 license

//! Text scanners used by the extraction rules.
//!
//! Two anchors are supported: word boundaries ([`identifiers`]) and
//! `#define` directives at the start of a line ([`define_directives`]).

/// Returns true for the bytes that make up C identifiers.
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterates over every maximal run of identifier characters in `text`.
///
/// Each run is delimited by word boundaries on both sides, so numbers such
/// as `0x10` come out as runs too. Rules filter what they need.
pub(crate) fn identifiers(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() && !is_word_byte(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }
        let start = pos;
        while pos < bytes.len() && is_word_byte(bytes[pos]) {
            pos += 1;
        }
        Some(&text[start..pos])
    })
}

/// Splits a leading identifier off `text`.
///
/// Returns the identifier and the remaining text, or `None` if `text` does
/// not start with an identifier character.
pub(crate) fn split_identifier(text: &str) -> Option<(&str, &str)> {
    let len = text.bytes().take_while(|b| is_word_byte(*b)).count();
    if len == 0 {
        None
    } else {
        Some(text.split_at(len))
    }
}

/// A `#define NAME` directive found at the start of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Define<'a> {
    /// The macro name.
    pub name: &'a str,
    /// Everything after the name, up to the end of the input.
    pub rest: &'a str,
}

/// Iterates over the `#define` directives that begin a line.
///
/// `rest` is not cut at the end of the line so rules can look past a
/// line continuation.
pub(crate) fn define_directives(text: &str) -> impl Iterator<Item = Define<'_>> {
    line_starts(text).filter_map(move |start| {
        let line = text[start..].strip_prefix("#define")?;
        let body = line.trim_start_matches([' ', '\t']);
        if body.len() == line.len() {
            return None;
        }
        let (name, rest) = split_identifier(body)?;
        Some(Define { name, rest })
    })
}

/// Byte offsets at which each line of `text` begins.
fn line_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        text.match_indices('\n')
            .map(|(idx, _)| idx + 1)
            .filter(move |idx| *idx < text.len()),
    )
}

/// Skips whitespace, then an optional `\` line continuation followed by more
/// whitespace.
pub(crate) fn skip_continuation(text: &str) -> &str {
    let text = text.trim_start();
    match text.strip_prefix('\\') {
        Some(after) => {
            let after = after.strip_prefix('\r').unwrap_or(after);
            match after.strip_prefix('\n') {
                Some(next_line) => next_line.trim_start(),
                None => text,
            }
        }
        None => text,
    }
}

/// Returns true if `text` starts with a whitespace character.
pub(crate) fn starts_with_whitespace(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_whitespace)
}
