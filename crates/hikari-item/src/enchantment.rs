//! Enchantment identifiers and their vanilla level caps.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ItemError;
use crate::key;

/// An enchantment identified by its namespaced key, e.g. `minecraft:sharpness`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Enchantment(Cow<'static, str>);

macro_rules! enchantments {
    ($($name:ident => $key:literal, $max:literal),* $(,)?) => {
        impl Enchantment {
            $(pub const $name: Self = Self(Cow::Borrowed($key));)*
        }

        /// Vanilla maximum levels.
        const MAX_LEVELS: &[(&str, u32)] = &[$(($key, $max)),*];
    };
}

enchantments! {
    PROTECTION => "minecraft:protection", 4,
    FIRE_PROTECTION => "minecraft:fire_protection", 4,
    FEATHER_FALLING => "minecraft:feather_falling", 4,
    BLAST_PROTECTION => "minecraft:blast_protection", 4,
    PROJECTILE_PROTECTION => "minecraft:projectile_protection", 4,
    RESPIRATION => "minecraft:respiration", 3,
    AQUA_AFFINITY => "minecraft:aqua_affinity", 1,
    THORNS => "minecraft:thorns", 3,
    DEPTH_STRIDER => "minecraft:depth_strider", 3,
    FROST_WALKER => "minecraft:frost_walker", 2,
    BINDING_CURSE => "minecraft:binding_curse", 1,
    SOUL_SPEED => "minecraft:soul_speed", 3,
    SWIFT_SNEAK => "minecraft:swift_sneak", 3,
    SHARPNESS => "minecraft:sharpness", 5,
    SMITE => "minecraft:smite", 5,
    BANE_OF_ARTHROPODS => "minecraft:bane_of_arthropods", 5,
    KNOCKBACK => "minecraft:knockback", 2,
    FIRE_ASPECT => "minecraft:fire_aspect", 2,
    LOOTING => "minecraft:looting", 3,
    SWEEPING => "minecraft:sweeping", 3,
    EFFICIENCY => "minecraft:efficiency", 5,
    SILK_TOUCH => "minecraft:silk_touch", 1,
    UNBREAKING => "minecraft:unbreaking", 3,
    FORTUNE => "minecraft:fortune", 3,
    POWER => "minecraft:power", 5,
    PUNCH => "minecraft:punch", 2,
    FLAME => "minecraft:flame", 1,
    INFINITY => "minecraft:infinity", 1,
    LUCK_OF_THE_SEA => "minecraft:luck_of_the_sea", 3,
    LURE => "minecraft:lure", 3,
    LOYALTY => "minecraft:loyalty", 3,
    IMPALING => "minecraft:impaling", 5,
    RIPTIDE => "minecraft:riptide", 3,
    CHANNELING => "minecraft:channeling", 1,
    MULTISHOT => "minecraft:multishot", 1,
    QUICK_CHARGE => "minecraft:quick_charge", 3,
    PIERCING => "minecraft:piercing", 4,
    MENDING => "minecraft:mending", 1,
    VANISHING_CURSE => "minecraft:vanishing_curse", 1,
}

impl Enchantment {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Highest level vanilla allows. Enchantments from other namespaces report 1.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        MAX_LEVELS
            .iter()
            .find(|(key, _)| *key == self.key())
            .map_or(1, |&(_, max)| max)
    }

    /// Whether this is one of the vanilla enchantments.
    #[must_use]
    pub fn is_vanilla(&self) -> bool {
        MAX_LEVELS.iter().any(|(key, _)| *key == self.key())
    }
}

impl FromStr for Enchantment {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key::normalize(s)
            .map(|key| Self(Cow::Owned(key)))
            .ok_or_else(|| ItemError::InvalidEnchantment(s.to_owned()))
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Enchantment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Enchantment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        assert_eq!(Enchantment::SHARPNESS.max_level(), 5);
        assert_eq!(Enchantment::MENDING.max_level(), 1);
        assert_eq!(Enchantment::PROTECTION.max_level(), 4);
    }

    #[test]
    fn test_custom_namespace() {
        let custom: Enchantment = "myplugin:lifesteal".parse().unwrap();
        assert!(!custom.is_vanilla());
        assert_eq!(custom.max_level(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "SHARPNESS".parse::<Enchantment>().ok(),
            Some(Enchantment::SHARPNESS)
        );
        assert!("sharp ness".parse::<Enchantment>().is_err());
    }
}
