//! Small layout helpers for chat and sign text.

use crate::colorize::strip_color;

/// Default chat line width used for centering.
pub const CHAT_WIDTH: usize = 40;

/// Lowercase every space-separated word, then uppercase its first letter.
///
/// Runs of spaces are preserved.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left-pad `text` so it sits in the middle of a line `width` characters wide.
///
/// Width is measured on the visible text, so color escapes don't count.
/// Text wider than the line gets no padding.
#[must_use]
pub fn center_text(text: &str, width: usize) -> String {
    let visible = strip_color(text).chars().count();
    let padding = width.saturating_sub(visible) / 2;
    let mut out = " ".repeat(padding);
    out.push_str(text);
    out
}
