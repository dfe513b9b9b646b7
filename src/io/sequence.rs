// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image loading.
//!
//! Frames of the hero sequence are decoded concurrently on worker threads
//! and delivered as one batch once every slot has been attempted. A frame
//! that fails to read or decode occupies its slot as `None`; the batch is
//! never aborted by individual failures.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Number of frames in the hero scroll sequence.
pub const FRAME_COUNT: usize = 191;

/// Decode worker threads for the sequence batch.
const LOAD_WORKERS: usize = 8;

/// A decoded image as RGBA8 pixels, ready for texture upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// File name of the 1-based frame `number`, e.g. `0001.jpg`.
pub fn frame_file_name(number: usize) -> String {
    format!("{:04}.jpg", number)
}

/// Read and decode a single image into RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Load `count` sequence frames from `dir` concurrently.
///
/// Returns a receiver that yields the complete slot vector exactly once,
/// after every frame has either decoded or failed.
pub fn spawn_sequence_load(dir: PathBuf, count: usize) -> Receiver<Vec<Option<LoadedImage>>> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let next = Arc::new(AtomicUsize::new(0));
        let (slot_sender, slot_receiver) = channel();

        let workers = LOAD_WORKERS.min(count.max(1));
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let next = Arc::clone(&next);
            let slot_sender = slot_sender.clone();
            let dir = dir.clone();
            handles.push(std::thread::spawn(move || loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                if index >= count {
                    break;
                }
                let path = dir.join(frame_file_name(index + 1));
                let frame = match load_image(&path) {
                    Ok(frame) => Some(frame),
                    Err(e) => {
                        log::warn!("Frame {} unavailable: {}", index + 1, e);
                        None
                    }
                };
                let _ = slot_sender.send((index, frame));
            }));
        }
        drop(slot_sender);

        // Each worker writes disjoint slots; collect until all have reported.
        let mut slots: Vec<Option<LoadedImage>> = (0..count).map(|_| None).collect();
        while let Ok((index, frame)) = slot_receiver.recv() {
            slots[index] = frame;
        }
        for handle in handles {
            let _ = handle.join();
        }

        let decoded = slots.iter().filter(|slot| slot.is_some()).count();
        log::info!("Sequence load complete: {}/{} frames decoded", decoded, count);
        let _ = sender.send(slots);
    });

    receiver
}

/// Load product images from `dir` on a background thread.
///
/// `images` pairs a product id with its image path relative to `dir`.
/// Successfully decoded images stream back one by one; failures are
/// logged and simply never arrive, leaving the card's placeholder up.
pub fn spawn_product_images_load(
    dir: PathBuf,
    images: Vec<(String, String)>,
) -> Receiver<(String, LoadedImage)> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        for (id, relative) in images {
            match load_image(&dir.join(&relative)) {
                Ok(img) => {
                    if sender.send((id, img)).is_err() {
                        break;
                    }
                }
                Err(e) => log::warn!("Product image {} unavailable: {}", relative, e),
            }
        }
    });

    receiver
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn write_test_image(path: &Path) {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 40, 40, 255]));
        // PNG bytes behind a .jpg name still decode; loading sniffs content.
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_frame_file_names_are_zero_padded() {
        assert_eq!(frame_file_name(1), "0001.jpg");
        assert_eq!(frame_file_name(51), "0051.jpg");
        assert_eq!(frame_file_name(191), "0191.jpg");
    }

    #[test]
    fn test_sequence_load_records_failures_as_none() {
        let dir = tempfile::tempdir().unwrap();
        write_test_image(&dir.path().join("0001.jpg"));
        write_test_image(&dir.path().join("0003.jpg"));
        // 0002.jpg is deliberately missing.

        let receiver = spawn_sequence_load(dir.path().to_path_buf(), 3);
        let slots = receiver.recv_timeout(Duration::from_secs(30)).unwrap();

        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_some());
        assert!(slots[1].is_none());
        assert!(slots[2].is_some());

        let frame = slots[0].as_ref().unwrap();
        assert_eq!((frame.width, frame.height), (2, 2));
        assert_eq!(frame.pixels.len(), 2 * 2 * 4);
    }

    #[test]
    fn test_all_frames_missing_still_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let receiver = spawn_sequence_load(dir.path().to_path_buf(), 5);
        let slots = receiver.recv_timeout(Duration::from_secs(30)).unwrap();
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_product_images_skip_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("collection")).unwrap();
        write_test_image(&dir.path().join("collection/ok.jpg"));

        let receiver = spawn_product_images_load(
            dir.path().to_path_buf(),
            vec![
                ("1".to_string(), "collection/ok.jpg".to_string()),
                ("2".to_string(), "collection/missing.jpg".to_string()),
            ],
        );

        let (id, _) = receiver.recv_timeout(Duration::from_secs(30)).unwrap();
        assert_eq!(id, "1");
        // The missing image never arrives and the channel closes.
        assert!(receiver.recv_timeout(Duration::from_secs(30)).is_err());
    }
}
