//! World registry port.

use hikari_item::Material;

/// A point in a named world.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    #[must_use]
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// The block this location falls in.
    #[must_use]
    pub fn block_pos(&self) -> BlockPos {
        BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Loaded worlds and their blocks.
pub trait WorldRegistry {
    fn world_names(&self) -> Vec<String>;

    fn has_world(&self, name: &str) -> bool;

    /// Load `name`, creating it if needed. Loading an already loaded world succeeds.
    fn create_world(&self, name: &str) -> bool;

    fn save_world(&self, name: &str);

    /// The block material, or `None` if the world isn't loaded.
    fn block(&self, world: &str, pos: BlockPos) -> Option<Material>;

    fn set_block(&self, world: &str, pos: BlockPos, material: Material) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_pos_floors() {
        let loc = Location::new("world", 1.9, 64.0, -0.5);
        assert_eq!(loc.block_pos(), BlockPos::new(1, 64, -1));
    }
}
