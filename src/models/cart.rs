// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shopping cart aggregate.
//!
//! The cart owns its line items exclusively; the rest of the UI only goes
//! through the operations here, which maintain two invariants: at most one
//! line item per product id, and every quantity within
//! `[1, available_quantity]`. Out-of-range requests clamp rather than fail.
//! Every mutation mirrors the full item list to the backing store.

use crate::io::storage::CartStore;
use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// A product plus the quantity selected for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub available_quantity: u32,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item for `product`, clamping the quantity to stock.
    ///
    /// Quantities saturate as min-then-max: an out-of-stock product
    /// (availability 0) floors at quantity 1, the same way the clamp
    /// behaves everywhere else in the aggregate.
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            available_quantity: product.available_quantity,
            quantity: quantity.min(product.available_quantity).max(1),
        }
    }
}

/// The in-memory cart, mirrored to durable storage on every mutation.
pub struct Cart {
    items: Vec<CartItem>,
    store: CartStore,
}

impl Cart {
    /// Load the cart from the given store, starting empty if nothing
    /// usable is persisted there.
    ///
    /// A file that parses but carries out-of-range quantities is
    /// clamped back into `[1, available_quantity]` slot by slot.
    pub fn load(store: CartStore) -> Self {
        let mut items = store.load();
        for item in &mut items {
            let clamped = item.quantity.min(item.available_quantity).max(1);
            if clamped != item.quantity {
                log::warn!(
                    "Clamped saved quantity for product {}: {} -> {}",
                    item.id,
                    item.quantity,
                    clamped
                );
                item.quantity = clamped;
            }
        }
        if !items.is_empty() {
            log::info!("Restored {} cart line item(s)", items.len());
        }
        Self { items, store }
    }

    /// Add `quantity` of `product`, merging into an existing line item if
    /// one exists. The resulting quantity is capped at the product's
    /// available quantity; over-requests are silently clamped.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .saturating_add(quantity)
                    .min(item.available_quantity)
                    .max(1);
            }
            None => {
                self.items.push(CartItem::new(product, quantity));
            }
        }
        log::info!("Added {} x product {} to cart", quantity, product.id);
        self.persist();
    }

    /// Set the quantity of an existing line item, clamped to
    /// `[1, available_quantity]`. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.quantity = quantity.min(item.available_quantity).max(1);
            self.persist();
        }
    }

    /// Remove the line item for `product_id` if present.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        if self.items.len() != before {
            log::info!("Removed product {} from cart", product_id);
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price * quantity` across all line items.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }

    /// Read-only view of the line items, for rendering.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            log::error!("Failed to save cart: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Catalog;

    fn test_cart(dir: &tempfile::TempDir) -> Cart {
        Cart::load(CartStore::new(dir.path().join("cart.json")))
    }

    #[test]
    fn test_add_merge_and_clamp() {
        let catalog = Catalog::bundled().unwrap();
        // Product 1: price 135, available quantity 10.
        let product = catalog.by_id("1").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        cart.add_to_cart(product, 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), 135.0);

        cart.add_to_cart(product, 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), 540.0);

        cart.add_to_cart(product, 20);
        assert_eq!(cart.total_items(), 10);
        assert_eq!(cart.total_price(), 1350.0);
    }

    #[test]
    fn test_no_duplicate_line_items() {
        let catalog = Catalog::bundled().unwrap();
        let product = catalog.by_id("2").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        for _ in 0..5 {
            cart.add_to_cart(product, 1);
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let catalog = Catalog::bundled().unwrap();
        let product = catalog.by_id("1").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        cart.add_to_cart(product, 5);

        cart.update_quantity("1", 0);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.update_quantity("1", 999);
        assert_eq!(cart.items()[0].quantity, product.available_quantity);

        // Unknown id is a no-op.
        cart.update_quantity("99", 3);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = Catalog::bundled().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        cart.add_to_cart(catalog.by_id("1").unwrap(), 2);
        cart.add_to_cart(catalog.by_id("5").unwrap(), 1);
        assert_eq!(cart.items().len(), 2);

        cart.remove_from_cart("1");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "5");

        // Removing an absent id is a no-op.
        cart.remove_from_cart("1");
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_totals_track_mutations() {
        let catalog = Catalog::bundled().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        cart.add_to_cart(catalog.by_id("2").unwrap(), 2); // 2 x 120
        cart.add_to_cart(catalog.by_id("4").unwrap(), 1); // 1 x 140
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 380.0);

        cart.update_quantity("2", 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 260.0);

        cart.remove_from_cart("4");
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), 120.0);
    }

    #[test]
    fn test_persists_across_reload() {
        let catalog = Catalog::bundled().unwrap();
        let dir = tempfile::tempdir().unwrap();

        {
            let mut cart = test_cart(&dir);
            cart.add_to_cart(catalog.by_id("3").unwrap(), 2);
        }

        let reloaded = test_cart(&dir);
        assert_eq!(reloaded.items().len(), 1);
        assert_eq!(reloaded.items()[0].id, "3");
        assert_eq!(reloaded.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_with_zero_availability() {
        // A saved cart can carry a product that has since sold out.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(
            &path,
            r#"[{"id":"1","name":"Funfair Evening","price":135.0,"image":"collection/funfair-evening.jpg","availableQuantity":0,"quantity":2}]"#,
        )
        .unwrap();

        let mut cart = Cart::load(CartStore::new(path));
        cart.update_quantity("1", 1);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.update_quantity("1", 0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_load_clamps_tampered_quantities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(
            &path,
            r#"[{"id":"1","name":"Funfair Evening","price":135.0,"image":"collection/funfair-evening.jpg","availableQuantity":10,"quantity":50},
                {"id":"2","name":"Lazy Sunday Morning","price":120.0,"image":"collection/lazy-sunday-morning.jpg","availableQuantity":15,"quantity":0}]"#,
        )
        .unwrap();

        let cart = Cart::load(CartStore::new(path));
        assert_eq!(cart.items()[0].quantity, 10);
        assert_eq!(cart.items()[1].quantity, 1);
        assert_eq!(cart.total_items(), 11);
    }

    #[test]
    fn test_add_to_cart_with_zero_availability() {
        let catalog = Catalog::bundled().unwrap();
        let mut sold_out = catalog.by_id("1").unwrap().clone();
        sold_out.available_quantity = 0;

        let dir = tempfile::tempdir().unwrap();
        let mut cart = test_cart(&dir);

        cart.add_to_cart(&sold_out, 3);
        assert_eq!(cart.items()[0].quantity, 1);

        // Merging into the existing line must not panic either.
        cart.add_to_cart(&sold_out, 3);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let catalog = Catalog::bundled().unwrap();
        let items = vec![
            CartItem::new(catalog.by_id("1").unwrap(), 4),
            CartItem::new(catalog.by_id("6").unwrap(), 5),
        ];

        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<CartItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items);
    }
}
