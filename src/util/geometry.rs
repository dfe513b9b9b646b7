// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module maps normalized scroll progress to frame indices and
//! computes cover-fit placement of an image inside a viewport.

/// Map progress in [0, 1] to a frame index in [0, count-1].
///
/// Progress of exactly 1.0 resolves to the last valid index; out-of-range
/// progress saturates at the bounds.
pub fn frame_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let index = (progress * count as f64).floor() as isize;
    index.clamp(0, count as isize - 1) as usize
}

/// Compute the rect an image should be drawn into so that it covers
/// `viewport` completely: aspect-preserving, centered, cropped at the
/// viewport edges rather than letterboxed.
pub fn cover_rect(image_width: f32, image_height: f32, viewport: egui::Rect) -> egui::Rect {
    let h_ratio = viewport.width() / image_width;
    let v_ratio = viewport.height() / image_height;
    let ratio = h_ratio.max(v_ratio);

    let size = egui::vec2(image_width * ratio, image_height * ratio);
    egui::Rect::from_center_size(viewport.center(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_endpoints() {
        assert_eq!(frame_index(0.0, 191), 0);
        assert_eq!(frame_index(1.0, 191), 190);
        assert_eq!(frame_index(0.5, 2), 1);
    }

    #[test]
    fn test_frame_index_saturates() {
        assert_eq!(frame_index(-0.5, 191), 0);
        assert_eq!(frame_index(1.5, 191), 190);
        assert_eq!(frame_index(0.5, 0), 0);
    }

    #[test]
    fn test_frame_index_monotone() {
        let mut last = 0;
        for step in 0..=100 {
            let p = step as f64 / 100.0;
            let index = frame_index(p, 191);
            assert!(index >= last);
            last = index;
        }
        assert_eq!(last, 190);
    }

    #[test]
    fn test_frame_index_scenario_frames() {
        // With 191 frames, progress 50/191 and 51/191 land on slots 50 and 51.
        assert_eq!(frame_index(50.0 / 191.0, 191), 50);
        assert_eq!(frame_index(51.0 / 191.0, 191), 51);
    }

    #[test]
    fn test_cover_rect_covers_viewport() {
        let viewport = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1920.0, 1080.0));

        for (w, h) in [(1500.0, 1500.0), (640.0, 480.0), (1080.0, 1920.0)] {
            let rect = cover_rect(w, h, viewport);
            assert!(rect.contains_rect(viewport));

            // Aspect ratio preserved.
            let aspect = rect.width() / rect.height();
            assert!((aspect - w / h).abs() < 1e-4);

            // Centered crop.
            assert!((rect.center() - viewport.center()).length() < 1e-3);
        }
    }

    #[test]
    fn test_cover_rect_exact_fit() {
        let viewport = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        let rect = cover_rect(800.0, 600.0, viewport);
        assert!((rect.width() - 800.0).abs() < 1e-4);
        assert!((rect.height() - 600.0).abs() < 1e-4);
    }
}
