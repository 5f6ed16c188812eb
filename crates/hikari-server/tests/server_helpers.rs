//! The `ServerExt` helpers driven against the in-memory host.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use hikari_item::{ItemBuilder, Material};
use hikari_server::prelude::*;
use hikari_server::{DEFAULT_WORLD, MemoryServer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("hikari_server=trace")
        .try_init();
}

struct BlockBreak {
    cancelled: bool,
}

impl Cancellable for BlockBreak {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl Event for BlockBreak {
    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        Some(self)
    }

    fn as_cancellable_mut(&mut self) -> Option<&mut dyn Cancellable> {
        Some(self)
    }
}

struct Chat {
    message: String,
}

impl Event for Chat {}

#[test]
fn test_cancellable_event() {
    init_tracing();
    let server = MemoryServer::new();

    let mut event = BlockBreak { cancelled: false };
    assert!(!server.is_event_cancelled(&mut event));

    server.observe(|e: &mut BlockBreak| e.set_cancelled(true));
    let mut event = BlockBreak { cancelled: false };
    assert!(server.is_event_cancelled(&mut event));
    assert!(event.cancelled);
}

#[test]
fn test_non_cancellable_event_is_never_cancelled() {
    let server = MemoryServer::new();
    server.observe(|e: &mut Chat| e.message.push('!'));

    let mut chat = Chat {
        message: "hi".to_owned(),
    };
    assert!(!server.is_event_cancelled(&mut chat));
    assert_eq!(chat.message, "hi!");
}

#[test]
fn test_observers_only_see_their_type() {
    let server = MemoryServer::new();
    let chats = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&chats);
    server.observe(move |_: &mut Chat| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    server.fire_event(&mut BlockBreak { cancelled: false });
    server.fire_event(&mut Chat {
        message: String::new(),
    });
    assert_eq!(chats.load(Ordering::Relaxed), 1);
}

#[test]
fn test_broadcast_is_colorized_for_online_players() {
    let server = MemoryServer::new();
    let alex = server.join("Alex");
    let steve = server.join("Steve");
    server.quit(steve);

    server.broadcast_message("&6Server restarting");

    assert_eq!(server.messages(alex), vec!["§6Server restarting"]);
    assert!(server.messages(steve).is_empty());
}

#[test]
fn test_player_lookup_and_worlds() {
    let server = MemoryServer::new();
    let alex = server.join("Alex");

    assert!(server.is_player_online(alex));
    assert_eq!(server.get_player(alex).map(|p| p.name), Some("Alex".to_owned()));
    assert!(server.is_player_in_world(alex, DEFAULT_WORLD));

    assert!(!server.world_exists("arena"));
    assert!(server.load_world("arena"));
    assert!(server.world_exists("arena"));
    assert!(server.teleport_player(alex, "arena", 10.5, 65.0, -3.0));
    assert!(server.is_player_in_world(alex, "arena"));
    assert!(!server.is_player_in_world(alex, DEFAULT_WORLD));

    server.quit(alex);
    assert!(!server.is_player_online(alex));
    assert!(!server.is_player_in_world(alex, "arena"));
}

#[test]
fn test_inventory_helpers() {
    let server = MemoryServer::new();
    let alex = server.join("Alex");
    let reward = ItemBuilder::of(Material::NETHER_STAR)
        .name("&dReward")
        .build()
        .unwrap();

    assert!(!server.has_item(alex, &reward));
    assert!(server.give_item(alex, reward.clone()));
    assert!(server.has_item(alex, &reward));

    server.clear_inventory(alex);
    assert!(!server.has_item(alex, &reward));
}

#[test]
fn test_delayed_and_repeating_tasks() {
    let server = MemoryServer::new();
    let once = Arc::new(AtomicU32::new(0));
    let repeated = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&once);
    server.schedule_task(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        5,
    );

    let counter = Arc::clone(&repeated);
    let timer = server.schedule_repeating_task(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        2,
        3,
    );

    server.tick_n(4);
    assert_eq!(once.load(Ordering::Relaxed), 0);
    assert_eq!(repeated.load(Ordering::Relaxed), 1);

    server.tick_n(4);
    assert_eq!(once.load(Ordering::Relaxed), 1);
    // ran on ticks 2, 5 and 8
    assert_eq!(repeated.load(Ordering::Relaxed), 3);

    server.cancel_task(timer);
    assert!(!server.is_queued(timer));
    server.tick_n(10);
    assert_eq!(repeated.load(Ordering::Relaxed), 3);
    assert_eq!(server.pending_tasks(), 0);
}

#[test]
fn test_far_future_tasks_stay_queued() {
    let server = MemoryServer::new();
    let runs = Arc::new(AtomicU32::new(0));

    server.tick();
    let counter = Arc::clone(&runs);
    let later = server.schedule_task(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        u64::MAX,
    );

    let counter = Arc::clone(&runs);
    let timer = server.schedule_repeating_task(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        1,
        u64::MAX,
    );

    server.tick_n(5);
    assert_eq!(runs.load(Ordering::Relaxed), 1);
    assert!(server.is_queued(later));
    assert!(server.is_queued(timer));
}

#[test]
fn test_task_cancels_itself() {
    let server = MemoryServer::new();
    let runs = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&runs);
    let id = server.schedule_repeating(
        Box::new(move |ctx: &mut TaskContext| {
            if counter.fetch_add(1, Ordering::Relaxed) + 1 == 3 {
                ctx.cancel();
            }
        }),
        1,
        1,
    );

    server.tick_n(10);
    assert_eq!(runs.load(Ordering::Relaxed), 3);
    assert!(!server.is_queued(id));
}

#[test]
fn test_run_task_later_sees_its_id() {
    let server = MemoryServer::new();
    let seen = Arc::new(AtomicU32::new(u32::MAX));

    let slot = Arc::clone(&seen);
    let id = server.run_task_later(
        move |ctx| {
            slot.store(ctx.id().raw(), Ordering::Relaxed);
        },
        1,
    );

    server.tick();
    assert_eq!(seen.load(Ordering::Relaxed), id.raw());
}

#[test]
fn test_respawn_happens_next_tick() {
    let server = MemoryServer::new();
    let alex = server.join("Alex");
    server.teleport_player(alex, DEFAULT_WORLD, 100.0, 5.0, 100.0);

    server.respawn_player(alex);
    assert_eq!(server.respawn_count(alex), 0);

    server.tick();
    assert_eq!(server.respawn_count(alex), 1);
    let location = server.get_player(alex).unwrap().location;
    assert_eq!((location.x, location.y, location.z), (0.0, 64.0, 0.0));
}

#[test]
fn test_blocks_and_saves() {
    let server = MemoryServer::new();
    assert!(server.set_block_at(DEFAULT_WORLD, 0, 70, 0, Material::GRASS_BLOCK));
    assert_eq!(
        server.get_block_at(DEFAULT_WORLD, 0, 70, 0),
        Some(Material::GRASS_BLOCK)
    );
    assert_eq!(server.get_block_at(DEFAULT_WORLD, 0, 71, 0), Some(Material::AIR));
    assert_eq!(server.get_block_at("missing", 0, 0, 0), None);

    server.load_world("lobby");
    server.save_all_worlds();
    server.save_all_worlds();
    assert_eq!(server.save_count(DEFAULT_WORLD), 2);
    assert_eq!(server.save_count("lobby"), 2);
}

#[test]
fn test_console_helpers() {
    let server = MemoryServer::new();
    assert!(server.execute_console_command("give Alex diamond 1"));
    server.log_to_console("&aPlugin enabled");

    assert_eq!(server.dispatched_commands(), vec!["give Alex diamond 1"]);
    assert_eq!(server.console_log(), vec!["§aPlugin enabled"]);
}
