// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Cart page.
//!
//! Renders the line items through the cart's read-only view; every
//! mutation goes back through the aggregate as a [`CartAction`] so the
//! quantity invariants stay in one place.

use crate::models::cart::CartItem;
use std::collections::HashMap;

/// Result of cart page interaction.
pub enum CartAction {
    None,
    UpdateQuantity(String, u32),
    Remove(String),
    Clear,
    ContinueShopping,
}

/// Display the cart page.
pub fn show(
    ui: &mut egui::Ui,
    items: &[CartItem],
    total_price: f64,
    textures: &HashMap<String, egui::TextureHandle>,
) -> CartAction {
    let mut action = CartAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new("Your Selection").size(32.0));
        ui.add_space(16.0);

        if items.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(64.0);
                ui.label(
                    egui::RichText::new("Your cart is currently empty.")
                        .size(18.0)
                        .weak(),
                );
                ui.add_space(16.0);
                if ui.button("Continue Shopping").clicked() {
                    action = CartAction::ContinueShopping;
                }
            });
            return;
        }

        for item in items {
            ui.horizontal(|ui| {
                super::product_image(ui, textures.get(&item.id), egui::vec2(64.0, 84.0));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&item.name).size(18.0));
                    ui.label(egui::RichText::new(format!("€{:.2}", item.price)).weak());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑").on_hover_text("Remove item").clicked() {
                        action = CartAction::Remove(item.id.clone());
                    }
                    ui.add_space(12.0);

                    if ui
                        .add_enabled(
                            item.quantity < item.available_quantity,
                            egui::Button::new("+"),
                        )
                        .clicked()
                    {
                        action = CartAction::UpdateQuantity(item.id.clone(), item.quantity + 1);
                    }
                    ui.label(item.quantity.to_string());
                    if ui
                        .add_enabled(item.quantity > 1, egui::Button::new("−"))
                        .clicked()
                    {
                        action = CartAction::UpdateQuantity(item.id.clone(), item.quantity - 1);
                    }
                });
            });
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Total (VAT included)").weak());
                ui.label(egui::RichText::new(format!("€{:.2}", total_price)).size(28.0));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Checkout").size(16.0))
                    .clicked()
                {
                    // No checkout flow exists; the storefront ends here.
                    log::info!("Checkout requested (not available in this build)");
                }
                ui.add_space(12.0);
                if ui.button("Clear cart").clicked() {
                    action = CartAction::Clear;
                }
            });
        });
    });

    action
}
