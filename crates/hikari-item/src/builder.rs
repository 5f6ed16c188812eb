//! Fluent item construction.
//!
//! ```
//! use hikari_item::{Enchantment, ItemBuilder, Material};
//!
//! let sword = ItemBuilder::of(Material::DIAMOND_SWORD)
//!     .name("&bFrostbite")
//!     .lore(["&7Forged in ice", "&7Never melts"])
//!     .enchant(Enchantment::SHARPNESS, 10)
//!     .unbreakable(true)
//!     .hide_tags(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sword.enchantment_level(&Enchantment::SHARPNESS), Some(10));
//! ```

use hikari_text::colorize;
use indexmap::IndexMap;
use tracing::error;

use crate::enchantment::Enchantment;
use crate::error::BuildError;
use crate::flags::ItemFlags;
use crate::material::Material;
use crate::meta::ItemMeta;
use crate::stack::ItemStack;

/// Accumulates an item description, then turns it into an [`ItemStack`].
///
/// Every setter replaces the previous value except [`lore`](Self::lore), which appends.
#[derive(Debug, Clone)]
#[must_use]
pub struct ItemBuilder {
    material: Option<Material>,
    name: Option<String>,
    amount: u32,
    damage: u16,
    lore: Vec<String>,
    enchantments: IndexMap<Enchantment, u32>,
    unbreakable: bool,
    hide_tags: bool,
    custom_model_data: Option<i32>,
    meta: Option<ItemMeta>,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self {
            material: None,
            name: None,
            amount: 1,
            damage: 0,
            lore: Vec::new(),
            enchantments: IndexMap::new(),
            unbreakable: false,
            hide_tags: false,
            custom_model_data: None,
            meta: None,
        }
    }
}

impl ItemBuilder {
    /// An empty builder. It cannot build until a material is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder seeded with `material`.
    pub fn of(material: Material) -> Self {
        Self::new().material(material)
    }

    /// A builder seeded with `material`, falling back to air when there is none.
    ///
    /// The fallback is logged and the later [`build`](Self::build) fails.
    pub fn from_material(material: Option<Material>) -> Self {
        let material = material.unwrap_or_else(|| {
            error!("ItemBuilder created without a material, using air");
            Material::AIR
        });
        Self::of(material)
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Display name, colorized.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(colorize(name));
        self
    }

    pub fn custom_model_data(mut self, model_data: Option<i32>) -> Self {
        self.custom_model_data = model_data;
        self
    }

    /// Append lore lines, each colorized.
    pub fn lore<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.lore
            .extend(lines.into_iter().map(|line| colorize(line.as_ref())));
        self
    }

    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Legacy damage value applied to the stack.
    pub fn damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    /// Same field as [`damage`](Self::damage); the last call wins.
    pub fn durability(self, durability: u16) -> Self {
        self.damage(durability)
    }

    /// Add an enchantment or replace its level. Levels are not capped.
    pub fn enchant(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.add_enchantment(enchantment, level);
        self
    }

    /// Non-chaining form of [`enchant`](Self::enchant).
    pub fn add_enchantment(&mut self, enchantment: Enchantment, level: u32) {
        self.enchantments.insert(enchantment, level);
    }

    pub fn unbreakable(mut self, unbreakable: bool) -> Self {
        self.unbreakable = unbreakable;
        self
    }

    /// Hide attribute and enchantment tooltips.
    pub fn hide_tags(mut self, hide_tags: bool) -> Self {
        self.hide_tags = hide_tags;
        self
    }

    /// Use `meta` as-is instead of translating name, lore, flags and model data.
    pub fn meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    #[must_use]
    pub fn enchantments(&self) -> &IndexMap<Enchantment, u32> {
        &self.enchantments
    }

    #[must_use]
    pub fn lore_lines(&self) -> &[String] {
        &self.lore
    }

    fn translate_meta(&self, mut meta: ItemMeta) -> ItemMeta {
        if let Some(name) = &self.name {
            meta.display_name = Some(name.clone());
        }
        if !self.lore.is_empty() {
            meta.lore.clone_from(&self.lore);
        }
        meta.unbreakable = self.unbreakable;
        if let Some(model_data) = self.custom_model_data {
            meta.custom_model_data = Some(model_data);
        }
        if self.hide_tags {
            meta.add_item_flags(ItemFlags::HIDE_ATTRIBUTES | ItemFlags::HIDE_ENCHANTS);
        }
        meta
    }

    /// Produce the item.
    ///
    /// Fails without a material or with an air material. Enchantments are
    /// applied unsafely, so levels above the vanilla cap are kept.
    pub fn build(self) -> Result<ItemStack, BuildError> {
        let material = match &self.material {
            None => return Err(BuildError::NoMaterial),
            Some(material) if material.is_air() => {
                return Err(BuildError::EmptyMaterial(material.clone()));
            }
            Some(material) => material.clone(),
        };

        let mut item = ItemStack::new(material.clone(), self.amount);
        let base = item
            .item_meta()
            .ok_or_else(|| BuildError::EmptyMaterial(material))?;

        let meta = match &self.meta {
            Some(injected) => injected.clone(),
            None => self.translate_meta(base),
        };
        item.set_item_meta(meta)?;

        item.set_damage(self.damage);
        for (enchantment, level) in self.enchantments {
            item.add_unsafe_enchantment(enchantment, level);
        }

        Ok(item)
    }
}
