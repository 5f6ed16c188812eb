use hikari_text::colorize;

/// Longest title a chest menu can show.
pub const MAX_TITLE_LEN: usize = 32;

/// Colorize `name` and cut it to [`MAX_TITLE_LEN`] characters.
///
/// The limit counts color codes too, since the client does.
#[must_use]
pub fn menu_title(name: &str) -> String {
    let colored = colorize(name);
    match colored.char_indices().nth(MAX_TITLE_LEN) {
        Some((end, _)) => colored.split_at(end).0.to_owned(),
        None => colored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title() {
        assert_eq!(menu_title("&6Shop"), "§6Shop");
    }

    #[test]
    fn test_long_title_is_cut() {
        let title = menu_title(&"a".repeat(40));
        assert_eq!(title.chars().count(), MAX_TITLE_LEN);
    }

    #[test]
    fn test_codes_count_towards_limit() {
        let title = menu_title(&"&a".repeat(20));
        assert_eq!(title.chars().count(), MAX_TITLE_LEN);
        assert!(title.ends_with('a'));
    }
}
