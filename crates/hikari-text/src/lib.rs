//! Chat text utilities for plugins.
//!
//! Plugin authors write colors with `&` codes (`&cDanger`) and hex sequences
//! (`&#FF8800Orange`). The client understands `§` escapes, so everything that
//! ends up in chat, item names, lore or inventory titles goes through
//! [`colorize`] first.
//!
//! # Example
//!
//! ```
//! use hikari_text::{colorize, strip_color};
//!
//! let line = colorize("&aWelcome &#FF8800back");
//! assert_eq!(line, "§aWelcome §x§f§f§8§8§0§0back");
//! assert_eq!(strip_color(&line), "Welcome back");
//! ```

mod color;
mod colorize;
mod format;

pub use color::{ALT_COLOR_CHAR, COLOR_CHAR, ChatColor, Rgb};
pub use colorize::{colorize, colorize_all, strip_color, translate_alternate_color_codes};
pub use format::{CHAT_WIDTH, capitalize_words, center_text};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ChatColor, Rgb, center_text, colorize, colorize_all, strip_color};
}
