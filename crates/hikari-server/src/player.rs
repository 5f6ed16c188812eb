//! Player registry port.

use hikari_item::ItemStack;
use uuid::Uuid;

use crate::world::Location;

/// What the host knows about an online player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub id: Uuid,
    pub name: String,
    pub location: Location,
}

/// Online players and their inventories.
///
/// Operations on offline or unknown players do nothing and report `false`.
pub trait PlayerRegistry {
    fn online_players(&self) -> Vec<Uuid>;

    /// Look up an online player.
    fn player(&self, id: Uuid) -> Option<PlayerInfo>;

    /// Send an already colorized chat message.
    fn send_message(&self, id: Uuid, message: &str);

    fn teleport(&self, id: Uuid, to: Location) -> bool;

    fn inventory_add(&self, id: Uuid, item: ItemStack) -> bool;

    fn inventory_contains(&self, id: Uuid, item: &ItemStack) -> bool;

    fn inventory_clear(&self, id: Uuid);

    fn respawn(&self, id: Uuid);
}
