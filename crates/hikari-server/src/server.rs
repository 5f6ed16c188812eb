//! The combined host port and the helpers plugins call.

use hikari_item::{ItemStack, Material};
use hikari_text::colorize;
use tracing::debug;
use uuid::Uuid;

use crate::console::Console;
use crate::event::{Event, EventBus};
use crate::player::{PlayerInfo, PlayerRegistry};
use crate::scheduler::{Scheduler, TaskContext, TaskId};
use crate::world::{BlockPos, Location, WorldRegistry};

/// Everything a plugin needs from the host.
pub trait Server: EventBus + Scheduler + PlayerRegistry + WorldRegistry + Console {}

impl<T: EventBus + Scheduler + PlayerRegistry + WorldRegistry + Console + ?Sized> Server for T {}

/// Convenience wrappers over a [`Server`].
///
/// Messages passed to [`broadcast_message`](Self::broadcast_message) and
/// [`log_to_console`](Self::log_to_console) are colorized first.
pub trait ServerExt: Server {
    /// Publish `event` to all listeners.
    fn fire_event<E: Event>(&self, event: &mut E);

    /// Publish `event`, then report whether a listener cancelled it.
    ///
    /// Events that can't be cancelled always report `false`.
    fn is_event_cancelled<E: Event>(&self, event: &mut E) -> bool;

    /// Send a colorized message to every online player.
    fn broadcast_message(&self, message: &str);

    /// Look up an online player.
    fn get_player(&self, id: Uuid) -> Option<PlayerInfo>;

    fn is_player_online(&self, id: Uuid) -> bool;

    fn is_player_in_world(&self, id: Uuid, world: &str) -> bool;

    fn teleport_player(&self, id: Uuid, world: &str, x: f64, y: f64, z: f64) -> bool;

    /// Run `task` once after `delay` ticks.
    fn schedule_task<F>(&self, task: F, delay: u64) -> TaskId
    where
        F: FnMut() + Send + 'static;

    /// Run `task` after `delay` ticks, then every `period` ticks.
    fn schedule_repeating_task<F>(&self, task: F, delay: u64, period: u64) -> TaskId
    where
        F: FnMut() + Send + 'static;

    /// Like [`schedule_task`](Self::schedule_task), but the task sees its own context.
    fn run_task_later<F>(&self, task: F, delay: u64) -> TaskId
    where
        F: FnMut(&mut TaskContext) + Send + 'static;

    fn has_item(&self, id: Uuid, item: &ItemStack) -> bool;

    fn give_item(&self, id: Uuid, item: ItemStack) -> bool;

    fn clear_inventory(&self, id: Uuid);

    /// Respawn a player on the next tick.
    ///
    /// The task keeps its own handle to the server, hence the `Clone` bound.
    fn respawn_player(&self, id: Uuid) -> TaskId
    where
        Self: Clone + Send + 'static;

    fn get_block_at(&self, world: &str, x: i32, y: i32, z: i32) -> Option<Material>;

    fn set_block_at(&self, world: &str, x: i32, y: i32, z: i32, material: Material) -> bool;

    fn world_exists(&self, name: &str) -> bool;

    /// Load or create a world.
    fn load_world(&self, name: &str) -> bool;

    fn save_all_worlds(&self);

    fn execute_console_command(&self, command: &str) -> bool;

    /// Log a colorized line to the console.
    fn log_to_console(&self, message: &str);
}

impl<S: Server + ?Sized> ServerExt for S {
    fn fire_event<E: Event>(&self, event: &mut E) {
        debug!(event = event.event_name(), "firing event");
        self.call_event(event);
    }

    fn is_event_cancelled<E: Event>(&self, event: &mut E) -> bool {
        self.fire_event(event);
        event.as_cancellable().is_some_and(|c| c.is_cancelled())
    }

    fn broadcast_message(&self, message: &str) {
        let message = colorize(message);
        for id in self.online_players() {
            self.send_message(id, &message);
        }
    }

    fn get_player(&self, id: Uuid) -> Option<PlayerInfo> {
        self.player(id)
    }

    fn is_player_online(&self, id: Uuid) -> bool {
        self.player(id).is_some()
    }

    fn is_player_in_world(&self, id: Uuid, world: &str) -> bool {
        self.player(id).is_some_and(|p| p.location.world == world)
    }

    fn teleport_player(&self, id: Uuid, world: &str, x: f64, y: f64, z: f64) -> bool {
        self.teleport(id, Location::new(world, x, y, z))
    }

    fn schedule_task<F>(&self, mut task: F, delay: u64) -> TaskId
    where
        F: FnMut() + Send + 'static,
    {
        self.schedule_once(Box::new(move |_: &mut TaskContext| task()), delay)
    }

    fn schedule_repeating_task<F>(&self, mut task: F, delay: u64, period: u64) -> TaskId
    where
        F: FnMut() + Send + 'static,
    {
        self.schedule_repeating(
            Box::new(move |_: &mut TaskContext| task()),
            delay,
            period,
        )
    }

    fn run_task_later<F>(&self, task: F, delay: u64) -> TaskId
    where
        F: FnMut(&mut TaskContext) + Send + 'static,
    {
        self.schedule_once(Box::new(task), delay)
    }

    fn has_item(&self, id: Uuid, item: &ItemStack) -> bool {
        self.inventory_contains(id, item)
    }

    fn give_item(&self, id: Uuid, item: ItemStack) -> bool {
        self.inventory_add(id, item)
    }

    fn clear_inventory(&self, id: Uuid) {
        self.inventory_clear(id);
    }

    fn respawn_player(&self, id: Uuid) -> TaskId
    where
        Self: Clone + Send + 'static,
    {
        let server = self.clone();
        self.schedule_once(Box::new(move |_: &mut TaskContext| server.respawn(id)), 1)
    }

    fn get_block_at(&self, world: &str, x: i32, y: i32, z: i32) -> Option<Material> {
        self.block(world, BlockPos::new(x, y, z))
    }

    fn set_block_at(&self, world: &str, x: i32, y: i32, z: i32, material: Material) -> bool {
        self.set_block(world, BlockPos::new(x, y, z), material)
    }

    fn world_exists(&self, name: &str) -> bool {
        self.has_world(name)
    }

    fn load_world(&self, name: &str) -> bool {
        self.create_world(name)
    }

    fn save_all_worlds(&self) {
        for name in self.world_names() {
            self.save_world(&name);
        }
    }

    fn execute_console_command(&self, command: &str) -> bool {
        self.dispatch_command(command)
    }

    fn log_to_console(&self, message: &str) {
        self.log(&colorize(message));
    }
}
