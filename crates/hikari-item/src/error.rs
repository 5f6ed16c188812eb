use thiserror::Error;

use crate::enchantment::Enchantment;
use crate::material::Material;

/// Errors from parsing identifiers or changing an item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Invalid material: {0:?}")]
    InvalidMaterial(String),
    #[error("Invalid enchantment: {0:?}")]
    InvalidEnchantment(String),
    #[error("Enchantment {enchantment} level {level} outside 1..={max}")]
    LevelOutOfRange {
        enchantment: Enchantment,
        level: u32,
        max: u32,
    },
    #[error("{0} has no item metadata")]
    NoMeta(Material),
}

/// Why an [`ItemBuilder`](crate::ItemBuilder) could not produce an item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("No material set")]
    NoMaterial,
    #[error("Material {0} is empty and cannot be built")]
    EmptyMaterial(Material),
    #[error(transparent)]
    Item(#[from] ItemError),
}
