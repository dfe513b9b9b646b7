// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Informational page: shipping, returns, and the house story.

/// Display the static information page.
pub fn show(ui: &mut egui::Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(560.0);
            ui.add_space(24.0);
            ui.heading(egui::RichText::new("About REPLICA").size(32.0));
            ui.add_space(16.0);

            ui.label(
                "Every REPLICA fragrance is a reproduction of a familiar moment: \
                 an evening at the funfair, a slow Sunday morning, the crackle of \
                 a fireplace. Each scent is composed in small batches and bottled \
                 by hand.",
            );
            ui.add_space(16.0);

            ui.label(egui::RichText::new("SHIPPING").small().strong());
            ui.label("Free shipping on orders over €200. Orders ship within 2 business days.");
            ui.add_space(12.0);

            ui.label(egui::RichText::new("RETURNS").small().strong());
            ui.label("30-day returns on unopened bottles, no questions asked.");
            ui.add_space(12.0);

            ui.label(egui::RichText::new("CONTACT").small().strong());
            ui.label("atelier@replica.example");
        });
    });
}
