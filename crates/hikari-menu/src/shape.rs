//! Predefined slot layouts for chest menus.
//!
//! Menus are 9 slots wide and 1 to 6 rows tall. Each shape lists the slots it
//! covers for every height it supports, typically used to lock decorative slots.

use thiserror::Error;

/// Slots in one menu row.
pub const ROW_SIZE: usize = 9;

/// Largest chest menu.
pub const MAX_SIZE: usize = ROW_SIZE * 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Menu size must be a positive multiple of 9 up to 54, got {0}")]
    InvalidSize(usize),
    #[error("{shape:?} has no layout for {rows} row(s)")]
    NoLayout { shape: MenuShape, rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuShape {
    /// A frame around the menu.
    Bounds,
    Circle,
    /// The leftmost and rightmost column.
    Columns,
    /// The top and bottom row.
    Rows,
    /// A centered 3x2 block.
    SixSlots,
    /// Two centered slots.
    TwoSlots,
    /// The center slot.
    OneSlot,
}

type Layouts = [Option<&'static [u8]>; 6];

const BOUNDS: Layouts = [
    None,
    None,
    Some(&[10, 11, 12, 13, 14, 15, 16]),
    Some(&[10, 11, 12, 13, 14, 15, 16, 19, 20, 21, 22, 23, 24, 25]),
    Some(&[
        10, 11, 12, 13, 14, 15, 16, 19, 20, 21, 22, 23, 24, 25, 28, 29, 30, 31, 32, 33, 34,
    ]),
    Some(&[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 17, 18, 26, 27, 35, 36, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        53,
    ]),
];

const CIRCLE: Layouts = [
    None,
    None,
    None,
    None,
    Some(&[
        11, 12, 13, 14, 15, 19, 20, 21, 22, 23, 24, 25, 29, 30, 31, 32, 33,
    ]),
    Some(&[
        12, 13, 14, 20, 21, 22, 23, 24, 29, 30, 31, 32, 33, 39, 40, 41,
    ]),
];

const COLUMNS: Layouts = [
    Some(&[0, 8]),
    Some(&[0, 8, 9, 17]),
    Some(&[0, 8, 9, 17, 18, 26]),
    Some(&[0, 8, 9, 17, 18, 26, 27, 35]),
    Some(&[0, 8, 9, 17, 18, 26, 27, 35, 36, 44]),
    Some(&[0, 8, 9, 17, 18, 26, 27, 35, 36, 44, 45, 53]),
];

const ROWS: Layouts = [
    None,
    None,
    Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 18, 19, 20, 21, 22, 23, 24, 25, 26]),
    Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 27, 28, 29, 30, 31, 32, 33, 34, 35]),
    Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 36, 37, 38, 39, 40, 41, 42, 43, 44]),
    Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 45, 46, 47, 48, 49, 50, 51, 52, 53]),
];

const SIX_SLOTS: Layouts = [
    None,
    Some(&[3, 4, 5, 12, 13, 14]),
    None,
    Some(&[12, 13, 14, 21, 22, 23]),
    None,
    Some(&[21, 22, 23, 30, 31, 32]),
];

const TWO_SLOTS: Layouts = [
    Some(&[3, 5]),
    Some(&[4, 13]),
    Some(&[12, 14]),
    Some(&[13, 22]),
    Some(&[21, 23]),
    Some(&[22, 31]),
];

const ONE_SLOT: Layouts = [
    Some(&[4]),
    Some(&[4]),
    Some(&[13]),
    Some(&[13]),
    Some(&[22]),
    Some(&[22]),
];

impl MenuShape {
    pub const ALL: [Self; 7] = [
        Self::Bounds,
        Self::Circle,
        Self::Columns,
        Self::Rows,
        Self::SixSlots,
        Self::TwoSlots,
        Self::OneSlot,
    ];

    const fn layouts(self) -> &'static Layouts {
        match self {
            Self::Bounds => &BOUNDS,
            Self::Circle => &CIRCLE,
            Self::Columns => &COLUMNS,
            Self::Rows => &ROWS,
            Self::SixSlots => &SIX_SLOTS,
            Self::TwoSlots => &TWO_SLOTS,
            Self::OneSlot => &ONE_SLOT,
        }
    }
}

/// Rows in a menu of `size` slots.
pub fn rows_for(size: usize) -> Result<usize, ShapeError> {
    if size == 0 || size % ROW_SIZE != 0 || size > MAX_SIZE {
        return Err(ShapeError::InvalidSize(size));
    }
    Ok(size / ROW_SIZE)
}

/// The slots `shape` covers in a menu of `size` slots.
pub fn locked_slots(shape: MenuShape, size: usize) -> Result<&'static [u8], ShapeError> {
    let rows = rows_for(size)?;
    shape.layouts()[rows - 1].ok_or(ShapeError::NoLayout { shape, rows })
}
