// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! REPLICA - Desktop storefront for the REPLICA fragrance collection
//!
//! A cross-platform desktop storefront with a scroll-driven hero
//! animation, a browsable catalog, and a locally persisted shopping cart.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::ReplicaApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let app = ReplicaApp::new()?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("REPLICA - Reproduction of familiar moments"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native("REPLICA", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
