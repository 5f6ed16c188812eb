//! Drives the helper crates against [`MemoryServer`] for a fixed number of ticks.
//!
//! Environment:
//! - `SANDBOX_TICKS`: ticks to run (default 40)
//! - `SANDBOX_ITEMS`: JSON file holding a list of item templates
//! - `RUST_LOG`: log filter

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use eyre::WrapErr;
use hikari_item::{ItemStack, ItemTemplate, Material};
use hikari_menu::{MenuShape, locked_slots, menu_title};
use hikari_server::prelude::*;
use hikari_server::{DEFAULT_WORLD, MemoryServer};
use hikari_text::{center_text, strip_color};
use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_TICKS: u64 = 40;

struct Config {
    ticks: u64,
    items: Option<PathBuf>,
}

impl Config {
    fn from_env() -> eyre::Result<Self> {
        let ticks = match std::env::var("SANDBOX_TICKS") {
            Ok(raw) => raw
                .parse()
                .wrap_err_with(|| format!("SANDBOX_TICKS is not a tick count: {raw:?}"))?,
            Err(_) => DEFAULT_TICKS,
        };
        let items = std::env::var("SANDBOX_ITEMS").ok().map(PathBuf::from);
        Ok(Self { ticks, items })
    }
}

/// A player breaking a block; observers may cancel it.
struct BlockBreak {
    player: Uuid,
    material: Material,
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

fn default_templates() -> Vec<ItemTemplate> {
    let mut sword = ItemTemplate::new("diamond_sword");
    sword.name = Some("&#ff5555Blade of &lDawn".to_owned());
    sword.lore = vec!["&7Forged at sunrise".to_owned()];
    sword.enchantments.insert("sharpness".to_owned(), 5);
    sword.unbreakable = true;

    let mut star = ItemTemplate::new("nether_star");
    star.name = Some("&dDaily Reward".to_owned());
    star.hide_tags = true;

    vec![sword, star]
}

fn load_templates(config: &Config) -> eyre::Result<Vec<ItemTemplate>> {
    let Some(path) = &config.items else {
        return Ok(default_templates());
    };
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).wrap_err_with(|| format!("invalid templates in {}", path.display()))
}

fn build_items(templates: &[ItemTemplate]) -> Vec<ItemStack> {
    let mut items = Vec::with_capacity(templates.len());
    for template in templates {
        let built = template
            .to_builder()
            .map_err(eyre::Report::from)
            .and_then(|builder| builder.build().map_err(eyre::Report::from));
        match built {
            Ok(item) => items.push(item),
            Err(err) => warn!(material = %template.material, "skipping template: {err}"),
        }
    }
    items
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hikari_sandbox=info".parse()?)
                .add_directive("hikari_server=debug".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(ticks = config.ticks, "Starting sandbox");

    let server = MemoryServer::new();
    let alex = server.join("Alex");
    let steve = server.join("Steve");
    server.load_world("arena");
    server.set_block_at(DEFAULT_WORLD, 0, 63, 0, Material::GRASS_BLOCK);

    let items = build_items(&load_templates(&config)?);
    for item in &items {
        server.give_item(alex, item.clone());
    }
    info!(count = items.len(), "Gave items to Alex");

    // protect spawn from Steve
    server.observe(move |event: &mut BlockBreak| {
        if event.player == steve {
            event.set_cancelled(true);
        }
    });
    for player in [alex, steve] {
        let mut event = BlockBreak {
            player,
            material: Material::STONE,
            cancelled: false,
        };
        let cancelled = server.is_event_cancelled(&mut event);
        info!(%player, material = %event.material, cancelled, "Block break");
    }

    let announcements = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&announcements);
    let announcer = server.clone();
    server.schedule_repeating_task(
        move || {
            let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
            announcer.broadcast_message(&format!("&eAnnouncement #{n}"));
        },
        0,
        20,
    );
    server.schedule_task(
        {
            let server = server.clone();
            move || {
                server.teleport_player(steve, "arena", 0.5, 80.0, 0.5);
            }
        },
        10,
    );
    server.run_task_later(
        {
            let server = server.clone();
            move |ctx| {
                server.log_to_console(&format!("&aTask {} ran", ctx.id().raw()));
            }
        },
        5,
    );
    server.respawn_player(alex);

    let ran = server.tick_n(config.ticks);
    info!(ran, tick = server.current_tick(), "Finished ticking");

    server.save_all_worlds();
    server.execute_console_command("/say sandbox done");

    info!(
        in_arena = server.is_player_in_world(steve, "arena"),
        respawns = server.respawn_count(alex),
        announcements = announcements.load(Ordering::Relaxed),
        "Summary"
    );
    for message in server.messages(alex) {
        info!("{}", center_text(&strip_color(&message), hikari_text::CHAT_WIDTH));
    }
    for line in server.console_log() {
        info!(console = %strip_color(&line));
    }

    let title = menu_title("&6&lSandbox Rewards");
    let frame = locked_slots(MenuShape::Bounds, 54)?;
    info!(title = %strip_color(&title), framed = frame.len(), "Reward menu layout");

    Ok(())
}
