// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Collection page: the product grid.

use crate::models::product::Catalog;
use std::collections::HashMap;

const GRID_COLUMNS: usize = 3;

/// Display the product grid. Returns the id of a product the user
/// opened, if any.
pub fn show(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    textures: &HashMap<String, egui::TextureHandle>,
) -> Option<String> {
    let mut open = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(egui::RichText::new("The Collection").size(32.0));
            ui.label(
                egui::RichText::new("Olfactory memories, bottled.")
                    .weak()
                    .italics(),
            );
            ui.add_space(24.0);
        });

        for row in catalog.products().chunks(GRID_COLUMNS) {
            ui.columns(GRID_COLUMNS, |columns| {
                for (column, product) in columns.iter_mut().zip(row) {
                    column.vertical_centered(|ui| {
                        super::product_image(
                            ui,
                            textures.get(&product.id),
                            egui::vec2(180.0, 240.0),
                        );
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(&product.name).size(18.0));
                        ui.label(
                            egui::RichText::new(format!("€{:.2}", product.price)).weak(),
                        );
                        ui.add_space(4.0);
                        if ui.button("View").clicked() {
                            open = Some(product.id.clone());
                        }
                        ui.add_space(24.0);
                    });
                }
            });
        }
    });

    open
}
