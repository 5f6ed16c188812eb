use bitflags::bitflags;

bitflags! {
    /// Tooltip sections hidden from the client.
    ///
    /// Bit values match the vanilla `HideFlags` tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        const HIDE_ENCHANTS = 1;
        const HIDE_ATTRIBUTES = 1 << 1;
        const HIDE_UNBREAKABLE = 1 << 2;
        const HIDE_DESTROYS = 1 << 3;
        const HIDE_PLACED_ON = 1 << 4;
        const HIDE_POTION_EFFECTS = 1 << 5;
        const HIDE_DYE = 1 << 6;
        const HIDE_ARMOR_TRIM = 1 << 7;
    }
}
