// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Durable cart storage.
//!
//! This module mirrors the cart to a JSON file in the per-user data
//! directory so the selection survives application restarts.

use crate::models::cart::CartItem;
use anyhow::Result;
use std::path::PathBuf;

/// File name used for the persisted cart.
const CART_FILE: &str = "cart.json";

/// Key-value style store holding the serialized cart at a fixed path.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store in the platform's per-user data directory,
    /// falling back to the working directory if it cannot be resolved.
    pub fn default_location() -> Self {
        let path = directories::ProjectDirs::from("", "", "replica")
            .map(|dirs| dirs.data_dir().join(CART_FILE))
            .unwrap_or_else(|| PathBuf::from(CART_FILE));
        Self::new(path)
    }

    /// Load the persisted cart items.
    ///
    /// An absent file yields an empty cart; a file that fails to parse is
    /// logged and also yields an empty cart.
    pub fn load(&self) -> Vec<CartItem> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&json) {
            Ok(items) => items,
            Err(e) => {
                log::warn!(
                    "Failed to parse saved cart at {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Write the full item list to the store.
    pub fn save(&self, items: &[CartItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(items)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
