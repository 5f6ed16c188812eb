//! Building blocks for inventory menus.
//!
//! The menu itself lives with the host. This crate provides what menus are
//! made of: [`Button`]s that render an item and react to a [`ClickType`],
//! fixed slot layouts via [`locked_slots`], and [`menu_title`].

mod button;
mod click;
mod shape;
mod title;

pub use button::{Button, SimpleButton};
pub use click::ClickType;
pub use shape::{MAX_SIZE, MenuShape, ROW_SIZE, ShapeError, locked_slots, rows_for};
pub use title::{MAX_TITLE_LEN, menu_title};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Button, ClickType, MenuShape, SimpleButton, locked_slots, menu_title};
}
