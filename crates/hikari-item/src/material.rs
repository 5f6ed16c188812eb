//! Item and block materials.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ItemError;
use crate::key;

/// A material identified by its namespaced key, e.g. `minecraft:stone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Material(Cow<'static, str>);

macro_rules! materials {
    ($($name:ident => $key:literal),* $(,)?) => {
        impl Material {
            $(pub const $name: Self = Self(Cow::Borrowed($key));)*
        }
    };
}

materials! {
    AIR => "minecraft:air",
    CAVE_AIR => "minecraft:cave_air",
    VOID_AIR => "minecraft:void_air",
    STONE => "minecraft:stone",
    DIRT => "minecraft:dirt",
    GRASS_BLOCK => "minecraft:grass_block",
    OAK_PLANKS => "minecraft:oak_planks",
    CHEST => "minecraft:chest",
    BARRIER => "minecraft:barrier",
    GLASS_PANE => "minecraft:glass_pane",
    GRAY_STAINED_GLASS_PANE => "minecraft:gray_stained_glass_pane",
    BLACK_STAINED_GLASS_PANE => "minecraft:black_stained_glass_pane",
    DIAMOND => "minecraft:diamond",
    EMERALD => "minecraft:emerald",
    NETHER_STAR => "minecraft:nether_star",
    PAPER => "minecraft:paper",
    BOOK => "minecraft:book",
    ARROW => "minecraft:arrow",
    BOW => "minecraft:bow",
    DIAMOND_SWORD => "minecraft:diamond_sword",
    DIAMOND_PICKAXE => "minecraft:diamond_pickaxe",
    PLAYER_HEAD => "minecraft:player_head",
}

impl Material {
    /// The full namespaced key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        key::split(&self.0).0
    }

    #[must_use]
    pub fn path(&self) -> &str {
        key::split(&self.0).1
    }

    /// Air variants never form an item.
    #[must_use]
    pub fn is_air(&self) -> bool {
        *self == Self::AIR || *self == Self::CAVE_AIR || *self == Self::VOID_AIR
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::AIR
    }
}

impl FromStr for Material {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key::normalize(s)
            .map(|key| Self(Cow::Owned(key)))
            .ok_or_else(|| ItemError::InvalidMaterial(s.to_owned()))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Material {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Material {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_constant() {
        assert_eq!("STONE".parse::<Material>().ok(), Some(Material::STONE));
        assert_eq!("stone".parse::<Material>().ok(), Some(Material::STONE));
        assert_eq!(
            "minecraft:stone".parse::<Material>().ok(),
            Some(Material::STONE)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "not a material".parse::<Material>(),
            Err(ItemError::InvalidMaterial(raw)) if raw == "not a material"
        ));
    }

    #[test]
    fn test_air() {
        assert!(Material::AIR.is_air());
        assert!(Material::CAVE_AIR.is_air());
        assert!("void_air".parse::<Material>().is_ok_and(|m| m.is_air()));
        assert!(!Material::STONE.is_air());
        assert!(Material::default().is_air());
    }

    #[test]
    fn test_key_parts() {
        let ruby: Material = "myplugin:ruby".parse().unwrap();
        assert_eq!(ruby.namespace(), "myplugin");
        assert_eq!(ruby.path(), "ruby");
        assert_eq!(ruby.to_string(), "myplugin:ruby");
    }
}
