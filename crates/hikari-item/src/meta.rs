//! Mutable item metadata: everything shown in the tooltip.

use crate::flags::ItemFlags;

/// Display and behaviour data attached to an [`ItemStack`](crate::ItemStack).
///
/// Strings are stored exactly as given. Callers colorize beforehand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
    pub unbreakable: bool,
    pub custom_model_data: Option<i32>,
    pub flags: ItemFlags,
}

impl ItemMeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item_flags(&mut self, flags: ItemFlags) {
        self.flags.insert(flags);
    }

    pub fn remove_item_flags(&mut self, flags: ItemFlags) {
        self.flags.remove(flags);
    }

    #[must_use]
    pub fn has_item_flag(&self, flag: ItemFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Whether nothing differs from a fresh view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut meta = ItemMeta::new();
        assert!(meta.is_empty());

        meta.add_item_flags(ItemFlags::HIDE_ENCHANTS | ItemFlags::HIDE_DYE);
        assert!(meta.has_item_flag(ItemFlags::HIDE_DYE));
        assert!(!meta.is_empty());

        meta.remove_item_flags(ItemFlags::HIDE_DYE);
        assert!(!meta.has_item_flag(ItemFlags::HIDE_DYE));
        assert!(meta.has_item_flag(ItemFlags::HIDE_ENCHANTS));
    }
}
