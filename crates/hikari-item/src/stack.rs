//! The concrete in-game item.

use indexmap::IndexMap;

use crate::enchantment::Enchantment;
use crate::error::ItemError;
use crate::material::Material;
use crate::meta::ItemMeta;

/// A material, a quantity, metadata and enchantments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    material: Material,
    amount: u32,
    damage: u16,
    meta: Option<ItemMeta>,
    enchantments: IndexMap<Enchantment, u32>,
}

impl ItemStack {
    #[must_use]
    pub fn new(material: Material, amount: u32) -> Self {
        Self {
            material,
            amount,
            damage: 0,
            meta: None,
            enchantments: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// Legacy damage value (durability used up).
    #[must_use]
    pub fn damage(&self) -> u16 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: u16) {
        self.damage = damage;
    }

    /// A copy of the metadata, or a fresh view if none was attached yet.
    ///
    /// Air has no metadata and returns `None`.
    #[must_use]
    pub fn item_meta(&self) -> Option<ItemMeta> {
        if self.material.is_air() {
            return None;
        }
        Some(self.meta.clone().unwrap_or_default())
    }

    /// Attach metadata. Empty metadata is not stored.
    pub fn set_item_meta(&mut self, meta: ItemMeta) -> Result<(), ItemError> {
        if self.material.is_air() {
            return Err(ItemError::NoMeta(self.material.clone()));
        }
        self.meta = (!meta.is_empty()).then_some(meta);
        Ok(())
    }

    #[must_use]
    pub fn has_item_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Enchantments in the order they were applied.
    #[must_use]
    pub fn enchantments(&self) -> &IndexMap<Enchantment, u32> {
        &self.enchantments
    }

    #[must_use]
    pub fn enchantment_level(&self, enchantment: &Enchantment) -> Option<u32> {
        self.enchantments.get(enchantment).copied()
    }

    /// Apply an enchantment within its vanilla level range.
    pub fn add_enchantment(
        &mut self,
        enchantment: Enchantment,
        level: u32,
    ) -> Result<(), ItemError> {
        let max = enchantment.max_level();
        if level == 0 || level > max {
            return Err(ItemError::LevelOutOfRange {
                enchantment,
                level,
                max,
            });
        }
        self.add_unsafe_enchantment(enchantment, level);
        Ok(())
    }

    /// Apply an enchantment at any level, replacing an existing one.
    pub fn add_unsafe_enchantment(&mut self, enchantment: Enchantment, level: u32) {
        self.enchantments.insert(enchantment, level);
    }

    /// Remove an enchantment, returning its level.
    pub fn remove_enchantment(&mut self, enchantment: &Enchantment) -> Option<u32> {
        self.enchantments.shift_remove(enchantment)
    }

    /// Same item ignoring the amount.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.material == other.material
            && self.damage == other.damage
            && self.meta == other.meta
            && self.enchantments == other.enchantments
    }
}
