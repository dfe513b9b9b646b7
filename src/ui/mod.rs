// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the REPLICA storefront.

pub mod cart;
pub mod collection;
pub mod hero;
pub mod info;
pub mod navbar;
pub mod product;

use crate::util::geometry::cover_rect;

/// Draw a product image cover-fitted into a slot of the given size,
/// or a neutral placeholder when the image is not available.
pub(crate) fn product_image(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(28));

    if let Some(texture) = texture {
        let tex_size = texture.size_vec2();
        let dest = cover_rect(tex_size.x, tex_size.y, rect);
        painter.image(
            texture.id(),
            dest,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
