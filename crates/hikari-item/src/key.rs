//! Namespaced identifiers (`namespace:path`).

const DEFAULT_NAMESPACE: &str = "minecraft";

fn valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.'))
}

fn valid_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'/'))
}

/// Normalize `STONE`, `stone` or `minecraft:stone` into `minecraft:stone`.
pub(crate) fn normalize(input: &str) -> Option<String> {
    let lower = input.trim().to_ascii_lowercase();
    let (namespace, path) = lower.split_once(':').unwrap_or((DEFAULT_NAMESPACE, &lower));
    if valid_namespace(namespace) && valid_path(path) {
        Some(format!("{namespace}:{path}"))
    } else {
        None
    }
}

/// Split a normalized key. Keys built by [`normalize`] always contain a colon.
pub(crate) fn split(key: &str) -> (&str, &str) {
    key.split_once(':').unwrap_or((DEFAULT_NAMESPACE, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("STONE").as_deref(), Some("minecraft:stone"));
        assert_eq!(normalize(" diamond_sword ").as_deref(), Some("minecraft:diamond_sword"));
        assert_eq!(normalize("myplugin:ruby").as_deref(), Some("myplugin:ruby"));
        assert_eq!(normalize("Minecraft:Stone").as_deref(), Some("minecraft:stone"));
    }

    #[test]
    fn test_normalize_rejects() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("minecraft:"), None);
        assert_eq!(normalize(":stone"), None);
        assert_eq!(normalize("two words"), None);
        assert_eq!(normalize("a:b:c"), None);
    }

    #[test]
    fn test_split() {
        assert_eq!(split("minecraft:stone"), ("minecraft", "stone"));
    }
}
