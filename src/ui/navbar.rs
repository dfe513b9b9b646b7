// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.
//!
//! This module provides the page switcher shown on every screen,
//! including the live cart item count.

use crate::app::Page;

/// Display the navigation bar and switch pages on click.
pub fn show(ui: &mut egui::Ui, page: &mut Page, cart_items: u32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        if ui
            .selectable_label(
                matches!(page, Page::Home),
                egui::RichText::new("REPLICA").size(18.0).strong(),
            )
            .clicked()
        {
            *page = Page::Home;
        }

        ui.separator();

        let on_collection = matches!(page, Page::Collection | Page::Product(_));
        if ui.selectable_label(on_collection, "Collection").clicked() {
            *page = Page::Collection;
        }

        if ui.selectable_label(matches!(page, Page::Info), "Info").clicked() {
            *page = Page::Info;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if cart_items > 0 {
                format!("Cart ({})", cart_items)
            } else {
                "Cart".to_string()
            };
            if ui
                .selectable_label(matches!(page, Page::Cart), label)
                .clicked()
            {
                *page = Page::Cart;
            }
        });
    });
}
