//! Clickable menu entries.

use std::fmt;

use hikari_item::ItemStack;
use uuid::Uuid;

use crate::click::ClickType;

/// A slot in a menu that shows an item and reacts to clicks.
///
/// `M` is the owning menu type, so a button can change the menu it lives in.
pub trait Button<M: ?Sized> {
    /// The item shown in the slot, or `None` for an empty slot.
    fn item(&self) -> Option<ItemStack>;

    /// Called when `player` clicks this button inside `menu`.
    fn on_clicked_in_menu(&mut self, player: Uuid, menu: &mut M, click: ClickType);
}

/// A button made from a fixed item and a click handler.
pub struct SimpleButton<M: ?Sized> {
    item: Option<ItemStack>,
    on_click: Box<dyn FnMut(Uuid, &mut M, ClickType) + Send>,
}

impl<M: ?Sized> SimpleButton<M> {
    pub fn new<F>(item: Option<ItemStack>, on_click: F) -> Self
    where
        F: FnMut(Uuid, &mut M, ClickType) + Send + 'static,
    {
        Self {
            item,
            on_click: Box::new(on_click),
        }
    }

    /// A button that shows `item` and ignores clicks.
    pub fn display(item: Option<ItemStack>) -> Self {
        Self::new(item, |_, _, _| {})
    }
}

impl<M: ?Sized> Button<M> for SimpleButton<M> {
    fn item(&self) -> Option<ItemStack> {
        self.item.clone()
    }

    fn on_clicked_in_menu(&mut self, player: Uuid, menu: &mut M, click: ClickType) {
        (self.on_click)(player, menu, click);
    }
}

impl<M: ?Sized> fmt::Debug for SimpleButton<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleButton")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
