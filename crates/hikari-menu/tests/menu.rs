//! A small shop menu assembled from buttons and a slot layout.

use hikari_item::{ItemBuilder, ItemStack, Material};
use hikari_menu::prelude::*;
use hikari_menu::ShapeError;
use uuid::Uuid;

struct ShopMenu {
    title: String,
    size: usize,
    slots: Vec<Option<Box<dyn Button<ShopMenu> + Send>>>,
    purchases: Vec<(Uuid, u32)>,
}

impl ShopMenu {
    fn new(name: &str, size: usize) -> Result<Self, ShapeError> {
        let mut menu = Self {
            title: menu_title(name),
            size,
            slots: (0..size).map(|_| None).collect(),
            purchases: Vec::new(),
        };

        let filler = ItemBuilder::of(Material::GRAY_STAINED_GLASS_PANE)
            .name(" ")
            .build()
            .ok();
        for &slot in locked_slots(MenuShape::Rows, size)? {
            let button = SimpleButton::<Self>::display(filler.clone());
            menu.slots[usize::from(slot)] = Some(Box::new(button));
        }
        Ok(menu)
    }

    fn set(&mut self, slot: usize, button: impl Button<Self> + Send + 'static) {
        self.slots[slot] = Some(Box::new(button));
    }

    fn render(&self) -> Vec<Option<ItemStack>> {
        self.slots
            .iter()
            .map(|button| button.as_ref().and_then(|b| b.item()))
            .collect()
    }

    fn click(&mut self, player: Uuid, slot: usize, click: ClickType) {
        // take the button out so it can borrow the menu mutably
        if let Some(mut button) = self.slots[slot].take() {
            button.on_clicked_in_menu(player, self, click);
            self.slots[slot] = Some(button);
        }
    }
}

#[test]
fn test_shop_menu() {
    let mut menu = ShopMenu::new("&6&lDiamond Shop", 27).unwrap();
    assert_eq!(menu.title, "§6§lDiamond Shop");

    let diamond = ItemBuilder::of(Material::DIAMOND)
        .name("&bDiamond")
        .lore(["&7Left click: 1", "&7Right click: 16"])
        .build()
        .ok();
    menu.set(
        13,
        SimpleButton::new(diamond.clone(), |player, menu: &mut ShopMenu, click| {
            let amount = if click.is_right_click() { 16 } else { 1 };
            menu.purchases.push((player, amount));
        }),
    );

    let rendered = menu.render();
    assert_eq!(rendered.len(), menu.size);
    assert_eq!(rendered[13], diamond);
    assert!(rendered[0].is_some());
    assert!(rendered[26].is_some());
    assert!(rendered[10].is_none());

    let player = Uuid::new_v4();
    menu.click(player, 13, ClickType::Left);
    menu.click(player, 13, ClickType::ShiftRight);
    // decorative slots swallow clicks
    menu.click(player, 0, ClickType::Left);
    menu.click(player, 10, ClickType::Left);

    assert_eq!(menu.purchases, vec![(player, 1), (player, 16)]);
}

#[test]
fn test_shop_menu_rejects_bad_sizes() {
    assert!(matches!(
        ShopMenu::new("Shop", 20),
        Err(ShapeError::InvalidSize(20))
    ));
    assert!(matches!(
        ShopMenu::new("Shop", 9),
        Err(ShapeError::NoLayout { rows: 1, .. })
    ));
}

#[test]
fn test_long_titles_are_cut() {
    let menu = ShopMenu::new("&aAn extremely long menu title that overflows", 54).unwrap();
    assert_eq!(menu.title.chars().count(), 32);
}
