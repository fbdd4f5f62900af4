//! Vendor menu book.
//!
//! In-memory menu lists, one per store, edited from the vendor dashboard.
//! Mutations are plain list edits in process memory; menus are reseeded on
//! every restart. Only the session record is durable.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use town_basket_core::{MenuItemId, StoreId};

use crate::models::{MenuItem, MenuItemStatus};

/// All vendor menus, keyed by store.
#[derive(Debug)]
pub struct MenuBook {
    menus: RwLock<HashMap<StoreId, Vec<MenuItem>>>,
    next_id: AtomicI32,
}

impl Default for MenuBook {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MenuBook {
    /// Build the menu book with the demo stores' starting menus.
    #[must_use]
    pub fn seeded() -> Self {
        let item = |id: i32, name: &str, price_cents: u32, orders: u32, status: MenuItemStatus| {
            MenuItem {
                id: MenuItemId::new(id),
                name: name.to_owned(),
                price_cents,
                orders_today: orders,
                status,
            }
        };

        let mut menus = HashMap::new();
        menus.insert(
            StoreId::new(1), // Pizza Palace
            vec![
                item(1, "Margherita Pizza", 1299, 45, MenuItemStatus::Available),
                item(2, "Pepperoni Pizza", 1499, 38, MenuItemStatus::Available),
                item(3, "Caesar Salad", 850, 22, MenuItemStatus::Available),
                item(4, "Garlic Bread", 599, 15, MenuItemStatus::SoldOut),
            ],
        );
        menus.insert(
            StoreId::new(2), // Burger House
            vec![
                item(5, "Chicken Burger", 999, 31, MenuItemStatus::Available),
                item(6, "Classic Cheeseburger", 899, 27, MenuItemStatus::Available),
                item(7, "Fries", 399, 40, MenuItemStatus::Available),
            ],
        );
        menus.insert(
            StoreId::new(3), // Spice Garden
            vec![
                item(8, "Chicken Biryani", 1599, 36, MenuItemStatus::Available),
                item(9, "Paneer Tikka", 1099, 18, MenuItemStatus::Available),
                item(10, "Garlic Naan", 349, 25, MenuItemStatus::Available),
            ],
        );

        Self {
            menus: RwLock::new(menus),
            next_id: AtomicI32::new(11),
        }
    }

    /// The menu for `store`, in insertion order. Unknown stores yield an
    /// empty menu.
    #[must_use]
    pub fn items(&self, store: StoreId) -> Vec<MenuItem> {
        self.menus
            .read()
            .ok()
            .and_then(|menus| menus.get(&store).cloned())
            .unwrap_or_default()
    }

    /// Append a new item to `store`'s menu and return it.
    pub fn add(&self, store: StoreId, name: &str, price_cents: u32) -> MenuItem {
        let item = MenuItem {
            id: MenuItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: name.to_owned(),
            price_cents,
            orders_today: 0,
            status: MenuItemStatus::Available,
        };
        if let Ok(mut menus) = self.menus.write() {
            menus.entry(store).or_default().push(item.clone());
        }
        item
    }

    /// Rename and reprice an item. Returns `false` if `store` has no item
    /// with that ID.
    pub fn update(&self, store: StoreId, id: MenuItemId, name: &str, price_cents: u32) -> bool {
        self.with_item(store, id, |item| {
            item.name = name.to_owned();
            item.price_cents = price_cents;
        })
        .is_some()
    }

    /// Remove an item. Returns `false` if `store` has no item with that ID.
    pub fn delete(&self, store: StoreId, id: MenuItemId) -> bool {
        let Ok(mut menus) = self.menus.write() else {
            return false;
        };
        let Some(items) = menus.get_mut(&store) else {
            return false;
        };
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() != before
    }

    /// Flip an item's availability, returning the new status.
    pub fn toggle(&self, store: StoreId, id: MenuItemId) -> Option<MenuItemStatus> {
        self.with_item(store, id, |item| {
            item.status = item.status.toggled();
            item.status
        })
    }

    fn with_item<T>(
        &self,
        store: StoreId,
        id: MenuItemId,
        apply: impl FnOnce(&mut MenuItem) -> T,
    ) -> Option<T> {
        let mut menus = self.menus.write().ok()?;
        let item = menus.get_mut(&store)?.iter_mut().find(|item| item.id == id)?;
        Some(apply(item))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PIZZA_PALACE: StoreId = StoreId::new(1);
    const BURGER_HOUSE: StoreId = StoreId::new(2);

    #[test]
    fn test_seeded_menus_per_store() {
        let book = MenuBook::seeded();
        assert_eq!(book.items(PIZZA_PALACE).len(), 4);
        assert_eq!(book.items(BURGER_HOUSE).len(), 3);
        assert!(book.items(StoreId::new(99)).is_empty());
    }

    #[test]
    fn test_add_appends_to_owning_store_only() {
        let book = MenuBook::seeded();
        let other_before = book.items(BURGER_HOUSE);

        let added = book.add(PIZZA_PALACE, "Calzone", 1150);
        assert_eq!(added.status, MenuItemStatus::Available);
        assert_eq!(added.orders_today, 0);

        let items = book.items(PIZZA_PALACE);
        assert_eq!(items.len(), 5);
        assert_eq!(items.last().unwrap().name, "Calzone");
        assert_eq!(book.items(BURGER_HOUSE), other_before);
    }

    #[test]
    fn test_added_ids_are_unique() {
        let book = MenuBook::seeded();
        let a = book.add(PIZZA_PALACE, "Special A", 100);
        let b = book.add(BURGER_HOUSE, "Special B", 200);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_edits_in_place() {
        let book = MenuBook::seeded();
        let id = book.items(PIZZA_PALACE).first().unwrap().id;

        assert!(book.update(PIZZA_PALACE, id, "Margherita XL", 1599));
        let items = book.items(PIZZA_PALACE);
        let item = items.iter().find(|i| i.id == id).unwrap();
        assert_eq!(item.name, "Margherita XL");
        assert_eq!(item.price_cents, 1599);
    }

    #[test]
    fn test_update_wrong_store_fails() {
        let book = MenuBook::seeded();
        let id = book.items(PIZZA_PALACE).first().unwrap().id;
        assert!(!book.update(BURGER_HOUSE, id, "Hijacked", 1));
    }

    #[test]
    fn test_delete_removes_once() {
        let book = MenuBook::seeded();
        let id = book.items(PIZZA_PALACE).first().unwrap().id;
        assert!(book.delete(PIZZA_PALACE, id));
        assert!(!book.delete(PIZZA_PALACE, id));
        assert_eq!(book.items(PIZZA_PALACE).len(), 3);
    }

    #[test]
    fn test_toggle_flips_status() {
        let book = MenuBook::seeded();
        let id = book.items(PIZZA_PALACE).first().unwrap().id;
        assert_eq!(
            book.toggle(PIZZA_PALACE, id),
            Some(MenuItemStatus::SoldOut)
        );
        assert_eq!(
            book.toggle(PIZZA_PALACE, id),
            Some(MenuItemStatus::Available)
        );
        assert_eq!(book.toggle(PIZZA_PALACE, MenuItemId::new(999)), None);
    }
}
