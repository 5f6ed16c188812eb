//! In-process host for tests and offline tooling.
//!
//! [`MemoryServer`] implements every port with plain data structures. Nothing
//! happens on its own: call [`MemoryServer::tick`] to advance the scheduler.
//!
//! ```
//! use hikari_server::{MemoryServer, ServerExt};
//!
//! let server = MemoryServer::new();
//! let steve = server.join("Steve");
//!
//! server.broadcast_message("&aHello");
//! assert_eq!(server.messages(steve), vec!["§aHello"]);
//! ```

mod events;
mod scheduler;

use std::sync::Arc;

use hashbrown::HashMap;
use hikari_item::{ItemStack, Material};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace};
use uuid::Uuid;

pub use events::ObserverId;

use crate::console::Console;
use crate::event::{Event, EventBus};
use crate::player::{PlayerInfo, PlayerRegistry};
use crate::scheduler::{Scheduler, Task, TaskContext, TaskId};
use crate::world::{BlockPos, Location, WorldRegistry};

use self::events::EventRegistry;
use self::scheduler::SchedulerState;

/// Name of the world created by [`MemoryServer::new`].
pub const DEFAULT_WORLD: &str = "world";

/// Where players appear when they join.
const SPAWN: (f64, f64, f64) = (0.0, 64.0, 0.0);

struct MemoryPlayer {
    name: String,
    online: bool,
    location: Location,
    inventory: Vec<ItemStack>,
    messages: Vec<String>,
    respawns: u32,
}

#[derive(Default)]
struct MemoryWorld {
    /// Only blocks that were set; everything else is air.
    blocks: HashMap<BlockPos, Material>,
    saves: u32,
}

#[derive(Default)]
struct ConsoleLog {
    lines: Vec<String>,
    commands: Vec<String>,
}

#[derive(Default)]
struct Inner {
    events: RwLock<EventRegistry>,
    scheduler: Mutex<SchedulerState>,
    players: RwLock<HashMap<Uuid, MemoryPlayer>>,
    worlds: RwLock<HashMap<String, MemoryWorld>>,
    console: Mutex<ConsoleLog>,
}

/// Cloneable handle to an in-memory server.
#[derive(Clone, Default)]
pub struct MemoryServer {
    inner: Arc<Inner>,
}

impl MemoryServer {
    /// A server with [`DEFAULT_WORLD`] loaded and nobody online.
    #[must_use]
    pub fn new() -> Self {
        let server = Self::default();
        server.create_world(DEFAULT_WORLD);
        server
    }

    /// Bring a new player online at spawn in the default world.
    pub fn join(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.join_with_id(id, name);
        id
    }

    /// Bring a player online. A returning player keeps their inventory and position.
    pub fn join_with_id(&self, id: Uuid, name: &str) {
        let mut players = self.inner.players.write();
        let player = players.entry(id).or_insert_with(|| MemoryPlayer {
            name: name.to_owned(),
            online: false,
            location: Location::new(DEFAULT_WORLD, SPAWN.0, SPAWN.1, SPAWN.2),
            inventory: Vec::new(),
            messages: Vec::new(),
            respawns: 0,
        });
        player.name = name.to_owned();
        player.online = true;
        debug!(%id, name, "player joined");
    }

    /// Take a player offline.
    pub fn quit(&self, id: Uuid) {
        if let Some(player) = self.inner.players.write().get_mut(&id) {
            player.online = false;
            debug!(%id, name = %player.name, "player quit");
        }
    }

    /// Register a listener for events of type `E`.
    pub fn observe<E, F>(&self, callback: F) -> ObserverId
    where
        E: Event,
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        self.inner.events.write().add::<E, F>(callback)
    }

    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.inner.events.write().remove(id)
    }

    /// Advance one tick, running every task due on it. Returns how many ran.
    ///
    /// Tasks run without any lock held, so they may use the server freely.
    pub fn tick(&self) -> usize {
        let (tick, due) = {
            let mut scheduler = self.inner.scheduler.lock();
            let due = scheduler.advance();
            (scheduler.current_tick(), due)
        };

        let mut ran = 0;
        for mut scheduled in due {
            if self.inner.scheduler.lock().was_cancelled(scheduled.id) {
                self.inner.scheduler.lock().finish(scheduled, true);
                continue;
            }

            let mut ctx = TaskContext::new(scheduled.id);
            (scheduled.task)(&mut ctx);
            ran += 1;
            trace!(tick, task = scheduled.id.raw(), "task ran");

            self.inner
                .scheduler
                .lock()
                .finish(scheduled, ctx.is_cancelled());
        }
        ran
    }

    /// Advance `ticks` ticks. Returns how many tasks ran in total.
    pub fn tick_n(&self, ticks: u64) -> usize {
        (0..ticks).map(|_| self.tick()).sum()
    }

    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.inner.scheduler.lock().current_tick()
    }

    /// Number of tasks waiting for a future tick.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.inner.scheduler.lock().pending()
    }

    /// Chat messages a player received, oldest first.
    #[must_use]
    pub fn messages(&self, id: Uuid) -> Vec<String> {
        self.inner
            .players
            .read()
            .get(&id)
            .map(|p| p.messages.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn inventory(&self, id: Uuid) -> Vec<ItemStack> {
        self.inner
            .players
            .read()
            .get(&id)
            .map(|p| p.inventory.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn respawn_count(&self, id: Uuid) -> u32 {
        self.inner
            .players
            .read()
            .get(&id)
            .map_or(0, |p| p.respawns)
    }

    /// How many times a world was saved.
    #[must_use]
    pub fn save_count(&self, world: &str) -> u32 {
        self.inner.worlds.read().get(world).map_or(0, |w| w.saves)
    }

    /// Lines written with [`Console::log`].
    #[must_use]
    pub fn console_log(&self) -> Vec<String> {
        self.inner.console.lock().lines.clone()
    }

    /// Commands run with [`Console::dispatch_command`].
    #[must_use]
    pub fn dispatched_commands(&self) -> Vec<String> {
        self.inner.console.lock().commands.clone()
    }

    fn with_online_player<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut MemoryPlayer) -> R,
    ) -> Option<R> {
        self.inner
            .players
            .write()
            .get_mut(&id)
            .filter(|p| p.online)
            .map(f)
    }
}

impl EventBus for MemoryServer {
    fn call_event(&self, event: &mut dyn Event) {
        let observers = self
            .inner
            .events
            .read()
            .observers_of(events::type_of(event));
        trace!(
            event = event.event_name(),
            observers = observers.len(),
            "dispatching event"
        );
        events::dispatch(&observers, event);
    }
}

impl Scheduler for MemoryServer {
    fn schedule_once(&self, task: Task, delay: u64) -> TaskId {
        self.inner.scheduler.lock().schedule(task, delay, None)
    }

    fn schedule_repeating(&self, task: Task, delay: u64, period: u64) -> TaskId {
        self.inner
            .scheduler
            .lock()
            .schedule(task, delay, Some(period))
    }

    fn cancel_task(&self, id: TaskId) {
        self.inner.scheduler.lock().cancel(id);
    }

    fn is_queued(&self, id: TaskId) -> bool {
        self.inner.scheduler.lock().is_queued(id)
    }
}

impl PlayerRegistry for MemoryServer {
    fn online_players(&self) -> Vec<Uuid> {
        let mut online: Vec<_> = self
            .inner
            .players
            .read()
            .iter()
            .filter(|(_, p)| p.online)
            .map(|(id, _)| *id)
            .collect();
        online.sort_unstable();
        online
    }

    fn player(&self, id: Uuid) -> Option<PlayerInfo> {
        self.inner
            .players
            .read()
            .get(&id)
            .filter(|p| p.online)
            .map(|p| PlayerInfo {
                id,
                name: p.name.clone(),
                location: p.location.clone(),
            })
    }

    fn send_message(&self, id: Uuid, message: &str) {
        self.with_online_player(id, |p| p.messages.push(message.to_owned()));
    }

    fn teleport(&self, id: Uuid, to: Location) -> bool {
        if !self.has_world(&to.world) {
            return false;
        }
        self.with_online_player(id, |p| p.location = to).is_some()
    }

    fn inventory_add(&self, id: Uuid, item: ItemStack) -> bool {
        let added = self.with_online_player(id, |p| p.inventory.push(item));
        added.is_some()
    }

    fn inventory_contains(&self, id: Uuid, item: &ItemStack) -> bool {
        let found = self.with_online_player(id, |p| p.inventory.contains(item));
        found.unwrap_or(false)
    }

    fn inventory_clear(&self, id: Uuid) {
        self.with_online_player(id, |p| p.inventory.clear());
    }

    fn respawn(&self, id: Uuid) {
        self.with_online_player(id, |p| {
            p.respawns += 1;
            p.location = Location::new(DEFAULT_WORLD, SPAWN.0, SPAWN.1, SPAWN.2);
        });
    }
}

impl WorldRegistry for MemoryServer {
    fn world_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.inner.worlds.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    fn has_world(&self, name: &str) -> bool {
        self.inner.worlds.read().contains_key(name)
    }

    fn create_world(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.inner
            .worlds
            .write()
            .entry(name.to_owned())
            .or_insert_with(|| {
                debug!(name, "world created");
                MemoryWorld::default()
            });
        true
    }

    fn save_world(&self, name: &str) {
        if let Some(world) = self.inner.worlds.write().get_mut(name) {
            world.saves += 1;
            debug!(name, "world saved");
        }
    }

    fn block(&self, world: &str, pos: BlockPos) -> Option<Material> {
        self.inner
            .worlds
            .read()
            .get(world)
            .map(|w| w.blocks.get(&pos).cloned().unwrap_or(Material::AIR))
    }

    fn set_block(&self, world: &str, pos: BlockPos, material: Material) -> bool {
        let mut worlds = self.inner.worlds.write();
        let Some(world) = worlds.get_mut(world) else {
            return false;
        };
        if material.is_air() {
            world.blocks.remove(&pos);
        } else {
            world.blocks.insert(pos, material);
        }
        true
    }
}

impl Console for MemoryServer {
    fn dispatch_command(&self, command: &str) -> bool {
        let command = command.trim().trim_start_matches('/');
        if command.is_empty() {
            return false;
        }
        info!(command, "console command");
        self.inner.console.lock().commands.push(command.to_owned());
        true
    }

    fn log(&self, message: &str) {
        info!("{message}");
        self.inner.console.lock().lines.push(message.to_owned());
    }
}
