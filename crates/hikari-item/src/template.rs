//! Item definitions loaded from plugin configuration.
//!
//! ```
//! use hikari_item::ItemTemplate;
//!
//! let template: ItemTemplate = serde_json::from_str(r#"{
//!     "material": "diamond_sword",
//!     "name": "&bFrostbite",
//!     "enchantments": { "sharpness": 10 }
//! }"#).unwrap();
//!
//! let sword = template.to_builder().unwrap().build().unwrap();
//! assert_eq!(sword.amount(), 1);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::builder::ItemBuilder;
use crate::enchantment::Enchantment;
use crate::error::ItemError;
use crate::material::Material;

const fn default_amount() -> u32 {
    1
}

/// Serializable description of an item. Text is stored uncolored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemTemplate {
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default)]
    pub damage: u16,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub enchantments: IndexMap<String, u32>,
    #[serde(default)]
    pub unbreakable: bool,
    #[serde(default)]
    pub hide_tags: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
}

impl ItemTemplate {
    /// A template for `material` with every other field at its default.
    #[must_use]
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            name: None,
            lore: Vec::new(),
            amount: default_amount(),
            damage: 0,
            enchantments: IndexMap::new(),
            unbreakable: false,
            hide_tags: false,
            custom_model_data: None,
        }
    }

    /// Resolve identifiers and load everything into a builder.
    pub fn to_builder(&self) -> Result<ItemBuilder, ItemError> {
        let material: Material = self.material.parse()?;

        let mut builder = ItemBuilder::of(material)
            .amount(self.amount)
            .damage(self.damage)
            .lore(&self.lore)
            .unbreakable(self.unbreakable)
            .hide_tags(self.hide_tags)
            .custom_model_data(self.custom_model_data);

        if let Some(name) = &self.name {
            builder = builder.name(name);
        }

        for (key, &level) in &self.enchantments {
            let enchantment: Enchantment = key.parse()?;
            builder.add_enchantment(enchantment, level);
        }

        Ok(builder)
    }
}
