//! `&` code and `&#RRGGBB` translation.

use crate::color::{ALT_COLOR_CHAR, COLOR_CHAR, Rgb};

/// Length of a hex specifier including the leading `#`.
const HEX_SPEC_LEN: usize = 7;

/// Characters that may follow an escape (`x` starts a hex sequence).
fn is_code_char(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r' | 'x')
}

/// Replace `alt` followed by a code character with `§` and the lowercased code.
///
/// Anything else, including `alt` followed by an unknown character, is left as is.
#[must_use]
pub fn translate_alternate_color_codes(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == alt && is_code_char(next) => {
                out.push(COLOR_CHAR);
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

/// Split a segment into a parsed hex color and the text after it.
fn split_hex(segment: &str) -> Option<(Rgb, &str)> {
    if !segment.starts_with('#') {
        return None;
    }
    let end = match segment.char_indices().nth(HEX_SPEC_LEN) {
        Some((idx, _)) => idx,
        None if segment.chars().count() == HEX_SPEC_LEN => segment.len(),
        None => return None,
    };
    let (spec, rest) = segment.split_at(end);
    Rgb::from_hex(spec).map(|rgb| (rgb, rest))
}

/// Translate `&` codes and `&#RRGGBB` sequences into client escapes.
///
/// The text is split on `&`. The first piece is kept verbatim. A piece starting
/// with a valid `#RRGGBB` becomes a hex escape followed by the rest of the piece;
/// every other piece gets its `&` back and goes through
/// [`translate_alternate_color_codes`], so unknown codes keep the literal `&`.
#[must_use]
pub fn colorize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segments = text.split(ALT_COLOR_CHAR);

    if let Some(first) = segments.next() {
        out.push_str(first);
    }

    for segment in segments {
        if let Some((rgb, rest)) = split_hex(segment) {
            out.push_str(&rgb.to_string());
            out.push_str(rest);
        } else {
            let mut piece = String::with_capacity(segment.len() + 1);
            piece.push(ALT_COLOR_CHAR);
            piece.push_str(segment);
            out.push_str(&translate_alternate_color_codes(ALT_COLOR_CHAR, &piece));
        }
    }

    out
}

/// [`colorize`] every line, keeping order. `None` yields an empty list.
#[must_use]
pub fn colorize_all<I>(lines: Option<I>) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .flatten()
        .map(|line| colorize(line.as_ref()))
        .collect()
}

/// Remove every `§` escape, leaving only visible text.
#[must_use]
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == COLOR_CHAR && is_code_char(next) => {
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}
