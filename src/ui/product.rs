// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Product detail page.
//!
//! Shows a single product with a quantity stepper and an add-to-cart
//! button. The stepper is clamped to `[1, available_quantity]` here, and
//! the cart clamps again on mutation.

use crate::models::product::Product;

/// Result of product page interaction.
pub enum ProductAction {
    None,
    AddToCart(u32),
    Back,
}

/// Display the detail page for `product`. `added` keeps the transient
/// "Added to Cart" confirmation on the button.
pub fn show(
    ui: &mut egui::Ui,
    product: &Product,
    texture: Option<&egui::TextureHandle>,
    quantity: &mut u32,
    added: bool,
) -> ProductAction {
    let mut action = ProductAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(16.0);
        if ui.button("← Back to Collection").clicked() {
            action = ProductAction::Back;
        }
        ui.add_space(16.0);

        ui.horizontal_top(|ui| {
            ui.add_space(24.0);
            super::product_image(ui, texture, egui::vec2(300.0, 400.0));
            ui.add_space(32.0);

            ui.vertical(|ui| {
                ui.set_max_width(480.0);

                ui.label(egui::RichText::new(&product.name).size(36.0));
                ui.label(
                    egui::RichText::new(format!("€{:.2}", product.price))
                        .size(24.0)
                        .weak(),
                );
                ui.add_space(16.0);

                ui.label(egui::RichText::new(&product.description).size(15.0));
                ui.add_space(12.0);
                ui.label(egui::RichText::new("FRAGRANCE NOTES").small().strong());
                ui.label(&product.notes);
                ui.add_space(12.0);
                ui.label(egui::RichText::new("USAGE").small().strong());
                ui.label(&product.usage);

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(*quantity > 1, egui::Button::new("−"))
                        .clicked()
                    {
                        *quantity -= 1;
                    }
                    ui.label(egui::RichText::new(quantity.to_string()).size(18.0));
                    if ui
                        .add_enabled(
                            *quantity < product.available_quantity,
                            egui::Button::new("+"),
                        )
                        .clicked()
                    {
                        *quantity += 1;
                    }

                    ui.add_space(16.0);

                    let label = if added { "Added to Cart" } else { "Add to Cart" };
                    if ui.button(egui::RichText::new(label).size(16.0)).clicked() && !added {
                        action = ProductAction::AddToCart(*quantity);
                    }
                });

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Free shipping on orders over €200. 30-day returns.")
                        .weak()
                        .small(),
                );
            });
        });
    });

    action
}
