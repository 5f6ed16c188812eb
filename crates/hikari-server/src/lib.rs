//! Host server ports for plugins.
//!
//! Plugin logic talks to the game server through a handful of narrow traits:
//!
//! - [`EventBus`]: publish events
//! - [`Scheduler`]: run tasks on later ticks
//! - [`PlayerRegistry`]: online players, chat and inventories
//! - [`WorldRegistry`]: worlds and blocks
//! - [`Console`]: commands and the server log
//!
//! Anything implementing all five is a [`Server`], and every server gets the
//! helpers in [`ServerExt`]. [`MemoryServer`] is a complete in-process host for
//! tests and tooling.

mod console;
mod event;
mod memory;
mod player;
mod scheduler;
mod server;
mod world;

pub use console::Console;
pub use event::{Cancellable, Event, EventBus};
pub use memory::{DEFAULT_WORLD, MemoryServer, ObserverId};
pub use player::{PlayerInfo, PlayerRegistry};
pub use scheduler::{Scheduler, Task, TaskContext, TaskId};
pub use server::{Server, ServerExt};
pub use world::{BlockPos, Location, WorldRegistry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Cancellable, Console, Event, EventBus, Location, PlayerRegistry, Scheduler, Server,
        ServerExt, TaskContext, TaskId, WorldRegistry,
    };
}
