//! Item stacks for plugins.
//!
//! [`ItemBuilder`] collects a name, lore, enchantments and flags, then
//! [`build`](ItemBuilder::build)s an [`ItemStack`]. Names and lore go through
//! [`hikari_text::colorize`] on the way in, so `&` codes work everywhere.
//!
//! Building fails softly: a builder without a usable material returns
//! [`BuildError`] instead of producing an air item.

mod builder;
mod enchantment;
mod error;
mod flags;
mod key;
mod material;
mod meta;
mod stack;
mod template;

pub use builder::ItemBuilder;
pub use enchantment::Enchantment;
pub use error::{BuildError, ItemError};
pub use flags::ItemFlags;
pub use material::Material;
pub use meta::ItemMeta;
pub use stack::ItemStack;
pub use template::ItemTemplate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BuildError, Enchantment, ItemBuilder, ItemFlags, ItemMeta, ItemStack, ItemTemplate,
        Material,
    };
}
