//! How a player clicked a slot.

/// Click classification reported by the host for inventory clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickType {
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    WindowBorderLeft,
    WindowBorderRight,
    Middle,
    NumberKey,
    DoubleClick,
    Drop,
    ControlDrop,
    Creative,
    SwapOffhand,
    Unknown,
}

impl ClickType {
    #[must_use]
    pub const fn is_left_click(self) -> bool {
        matches!(
            self,
            Self::Left | Self::ShiftLeft | Self::DoubleClick | Self::Creative
        )
    }

    #[must_use]
    pub const fn is_right_click(self) -> bool {
        matches!(self, Self::Right | Self::ShiftRight)
    }

    #[must_use]
    pub const fn is_shift_click(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight | Self::ControlDrop)
    }

    #[must_use]
    pub const fn is_keyboard_click(self) -> bool {
        matches!(
            self,
            Self::NumberKey | Self::Drop | Self::ControlDrop | Self::SwapOffhand
        )
    }

    #[must_use]
    pub const fn is_creative_action(self) -> bool {
        matches!(self, Self::Middle | Self::Creative)
    }
}
