// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Home page: scroll-driven hero animation with narrative overlays.
//!
//! A fixed canvas paints the frame of the image sequence selected by the
//! smoothed scroll progress, cover-fitted to the viewport. A transparent
//! scroll region on top supplies the progress signal, and four text
//! "beats" fade in and out at fixed progress breakpoints.

use crate::util::geometry::{cover_rect, frame_index};

/// How many viewport heights of scroll drive the sequence.
const SCROLL_SCREENS: f32 = 6.0;

/// Background behind the sequence ("deep pacific").
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);

/// Placeholder label color (amber).
const PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(0xfb, 0xbf, 0x24);

/// Loading bar fill (emerald).
const LOADING_BAR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);

/// Result of home page interaction.
pub enum HeroAction {
    None,
    ViewCollection,
}

/// Display the home page. Returns the raw scroll progress in [0, 1]
/// alongside any triggered action; `smoothed` is last frame's progress
/// after spring smoothing and drives the canvas.
pub fn show(
    ui: &mut egui::Ui,
    frames: &[Option<egui::TextureHandle>],
    loaded: bool,
    smoothed: f32,
) -> (f32, HeroAction) {
    let viewport = ui.max_rect();

    // Fixed canvas underneath the scroll region.
    let painter = ui.painter().with_clip_rect(viewport);
    paint(&painter, viewport, smoothed, frames, loaded);

    // Transparent scroll region; its offset is the progress signal.
    let output = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.allocate_space(egui::vec2(
                ui.available_width(),
                viewport.height() * SCROLL_SCREENS,
            ));
        });

    let max_scroll = (output.content_size.y - output.inner_rect.height()).max(1.0);
    let progress = (output.state.offset.y / max_scroll).clamp(0.0, 1.0);

    let action = paint_beats(ui, viewport, progress);
    (progress, action)
}

/// Paint one frame of the sequence, cover-fitted into `viewport`.
///
/// Missing frames paint the background plus a human-readable placeholder
/// label; a not-yet-loaded sequence paints a loading bar instead.
pub fn paint(
    painter: &egui::Painter,
    viewport: egui::Rect,
    progress: f32,
    frames: &[Option<egui::TextureHandle>],
    loaded: bool,
) {
    painter.rect_filled(viewport, 0.0, BACKGROUND);

    if !loaded {
        let bar = egui::Rect::from_center_size(viewport.center(), egui::vec2(128.0, 4.0));
        painter.rect_filled(bar, 0.0, egui::Color32::from_white_alpha(40));
        let fill = egui::Rect::from_min_size(bar.min, egui::vec2(bar.width() / 2.0, bar.height()));
        painter.rect_filled(fill, 0.0, LOADING_BAR);
        return;
    }
    if frames.is_empty() {
        return;
    }

    let index = frame_index(progress as f64, frames.len());
    match &frames[index] {
        Some(texture) => {
            let size = texture.size_vec2();
            let dest = cover_rect(size.x, size.y, viewport);
            painter.image(
                texture.id(),
                dest,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            painter.text(
                viewport.center(),
                egui::Align2::CENTER_CENTER,
                placeholder_label(index, frames.len()),
                egui::FontId::proportional(40.0),
                PLACEHOLDER,
            );
        }
    }
}

/// Label painted when a frame slot failed to load, 1-based.
pub(crate) fn placeholder_label(frame_index: usize, count: usize) -> String {
    format!("Frame {} / {}", frame_index + 1, count)
}

/// Piecewise-linear keyframe lookup; saturates outside the stop range.
pub(crate) fn ramp(p: f32, stops: &[(f32, f32)]) -> f32 {
    let (first_x, first_y) = stops[0];
    if p <= first_x {
        return first_y;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if p <= x1 {
            let t = (p - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    stops[stops.len() - 1].1
}

/// Draw the four narrative beats at their progress breakpoints.
fn paint_beats(ui: &mut egui::Ui, viewport: egui::Rect, progress: f32) -> HeroAction {
    let mut action = HeroAction::None;
    let painter = ui.painter().with_clip_rect(viewport);
    let center = viewport.center();

    // Beat A: the hook.
    let opacity_a = ramp(progress, &[(0.0, 1.0), (0.2, 0.0)]);
    let shift_a = ramp(progress, &[(0.0, 0.0), (0.2, -50.0)]);
    if opacity_a > 0.0 {
        beat_text(&painter, center + egui::vec2(0.0, shift_a - 30.0), "REPLICA", 72.0, opacity_a);
        beat_text(
            &painter,
            center + egui::vec2(0.0, shift_a + 40.0),
            "Reproduction of familiar moments.",
            16.0,
            opacity_a,
        );
    }

    // Beat B: the features, with the collection call-to-action.
    let opacity_b = ramp(progress, &[(0.1, 0.0), (0.3, 1.0), (0.5, 0.0)]);
    let shift_b = ramp(progress, &[(0.1, 50.0), (0.5, -50.0)]);
    if opacity_b > 0.0 {
        beat_text(
            &painter,
            center + egui::vec2(0.0, shift_b - 50.0),
            "Find Your Signature.",
            48.0,
            opacity_b,
        );
        beat_text(
            &painter,
            center + egui::vec2(0.0, shift_b + 10.0),
            "Explore our full library of olfactory memories.",
            16.0,
            opacity_b,
        );
        if opacity_b > 0.5 {
            let button_rect = egui::Rect::from_center_size(
                center + egui::vec2(0.0, shift_b + 70.0),
                egui::vec2(180.0, 36.0),
            );
            if ui
                .put(button_rect, egui::Button::new("VIEW COLLECTION"))
                .clicked()
            {
                action = HeroAction::ViewCollection;
            }
        }
    }

    // Beat C: testimonials.
    let opacity_c = ramp(progress, &[(0.4, 0.0), (0.6, 1.0), (0.8, 0.0)]);
    let shift_c = ramp(progress, &[(0.4, 50.0), (0.8, -50.0)]);
    if opacity_c > 0.0 {
        beat_text(
            &painter,
            center + egui::vec2(0.0, shift_c - 70.0),
            "Stories from Paradise",
            40.0,
            opacity_c,
        );
        let quotes = [
            "\"The scent of a memory I didn't know I had.\" — Isabella V.",
            "\"Pure elegance captured in a single breath.\" — Julian R.",
            "\"A masterpiece that lingers like a dream.\" — Sophia L.",
        ];
        for (i, quote) in quotes.iter().enumerate() {
            beat_text(
                &painter,
                center + egui::vec2(0.0, shift_c - 10.0 + 30.0 * i as f32),
                quote,
                14.0,
                opacity_c,
            );
        }
    }

    // Beat D: closing call-to-action.
    let opacity_d = ramp(progress, &[(0.7, 0.0), (0.9, 1.0), (1.0, 1.0)]);
    let shift_d = ramp(progress, &[(0.7, 50.0), (1.0, 0.0)]);
    if opacity_d > 0.0 {
        beat_text(&painter, center + egui::vec2(0.0, shift_d - 30.0), "REPLICA", 72.0, opacity_d);
        beat_text(
            &painter,
            center + egui::vec2(0.0, shift_d + 40.0),
            "Small batch. Limited availability",
            16.0,
            opacity_d,
        );
    }

    // Scroll hint while near the top.
    let hint_opacity = ramp(progress, &[(0.0, 1.0), (0.05, 0.0)]);
    if hint_opacity > 0.0 {
        beat_text(
            &painter,
            egui::pos2(center.x, viewport.max.y - 32.0),
            "SCROLL TO EXPLORE",
            11.0,
            hint_opacity * 0.4,
        );
    }

    action
}

fn beat_text(painter: &egui::Painter, pos: egui::Pos2, text: &str, size: f32, opacity: f32) {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(size),
        egui::Color32::from_white_alpha(alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_label_is_one_based() {
        assert_eq!(placeholder_label(50, 191), "Frame 51 / 191");
        assert_eq!(placeholder_label(51, 191), "Frame 52 / 191");
        assert_eq!(placeholder_label(0, 191), "Frame 1 / 191");
    }

    #[test]
    fn test_ramp_interpolates() {
        let stops = [(0.1, 0.0), (0.3, 1.0), (0.5, 0.0)];
        assert_eq!(ramp(0.0, &stops), 0.0);
        assert_eq!(ramp(0.3, &stops), 1.0);
        assert!((ramp(0.2, &stops) - 0.5).abs() < 1e-5);
        assert!((ramp(0.4, &stops) - 0.5).abs() < 1e-5);
        assert_eq!(ramp(0.9, &stops), 0.0);
    }

    #[test]
    fn test_ramp_saturates_outside_range() {
        let stops = [(0.2, 1.0), (0.8, 3.0)];
        assert_eq!(ramp(0.0, &stops), 1.0);
        assert_eq!(ramp(1.0, &stops), 3.0);
    }
}
