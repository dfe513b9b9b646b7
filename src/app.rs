// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the page state, the cart aggregate, and the
//! background image loaders, and dispatches the per-page UI actions.

use crate::io::sequence::{
    spawn_product_images_load, spawn_sequence_load, LoadedImage, FRAME_COUNT,
};
use crate::io::storage::CartStore;
use crate::models::{cart::Cart, product::Catalog};
use crate::ui::{cart, collection, hero, info, navbar, product};
use crate::util::spring::Spring;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Seconds the "Added to Cart" confirmation stays visible.
const ADDED_CONFIRMATION_SECS: f64 = 2.0;

/// Current page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Collection,
    /// Detail page for the product with this id.
    Product(String),
    Cart,
    Info,
}

/// Root of the asset tree holding the hero sequence and product images.
fn assets_dir() -> PathBuf {
    std::env::var_os("REPLICA_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Main application state.
pub struct ReplicaApp {
    /// Currently displayed page
    page: Page,

    /// Read-only product catalog
    catalog: Catalog,

    /// Shopping cart aggregate, mirrored to durable storage
    cart: Cart,

    /// Hero sequence textures; `None` slots failed to load
    frames: Vec<Option<egui::TextureHandle>>,

    /// Set once the whole sequence batch has been attempted
    sequence_loaded: bool,

    /// Receiver for the background sequence load
    sequence_loader: Option<Receiver<Vec<Option<LoadedImage>>>>,

    /// Receiver for background product image loads
    product_loader: Option<Receiver<(String, LoadedImage)>>,

    /// Uploaded product image textures by product id
    product_textures: HashMap<String, egui::TextureHandle>,

    /// Spring-smoothed scroll progress driving the hero canvas
    scroll_spring: Spring,

    /// Quantity selected on the product page
    pending_quantity: u32,

    /// Deadline until which the "Added to Cart" confirmation shows
    added_until: Option<f64>,
}

impl ReplicaApp {
    /// Create the application and kick off the background image loads.
    pub fn new() -> Result<Self> {
        let catalog = Catalog::bundled()?;
        let cart = Cart::load(CartStore::default_location());

        let assets = assets_dir();
        let sequence_loader = Some(spawn_sequence_load(assets.join("sequence"), FRAME_COUNT));
        let images = catalog
            .products()
            .iter()
            .map(|p| (p.id.clone(), p.image.clone()))
            .collect();
        let product_loader = Some(spawn_product_images_load(assets, images));

        Ok(Self {
            page: Page::Home,
            catalog,
            cart,
            frames: Vec::new(),
            sequence_loaded: false,
            sequence_loader,
            product_loader,
            product_textures: HashMap::new(),
            scroll_spring: Spring::new(0.0),
            pending_quantity: 1,
            added_until: None,
        })
    }

    /// Poll the background loaders and upload finished images as textures.
    fn poll_loaders(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.sequence_loader {
            if let Ok(slots) = receiver.try_recv() {
                self.frames = slots
                    .into_iter()
                    .enumerate()
                    .map(|(i, slot)| {
                        slot.map(|img| {
                            let size = [img.width as usize, img.height as usize];
                            let color_image =
                                egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                            ctx.load_texture(
                                format!("frame_{}", i),
                                color_image,
                                egui::TextureOptions::LINEAR,
                            )
                        })
                    })
                    .collect();
                self.sequence_loaded = true;
                self.sequence_loader = None;
                log::info!("Hero sequence ready ({} slots)", self.frames.len());
            }
        }

        if let Some(receiver) = &self.product_loader {
            loop {
                match receiver.try_recv() {
                    Ok((id, img)) => {
                        let size = [img.width as usize, img.height as usize];
                        let color_image =
                            egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                        let texture = ctx.load_texture(
                            format!("product_{}", id),
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.product_textures.insert(id, texture);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.product_loader = None;
                        break;
                    }
                }
            }
        }

        // Keep polling while anything is still loading.
        if self.sequence_loader.is_some() || self.product_loader.is_some() {
            ctx.request_repaint();
        }
    }

    /// Navigate to a product detail page, resetting its transient state.
    fn open_product(&mut self, id: String) {
        self.pending_quantity = 1;
        self.added_until = None;
        self.page = Page::Product(id);
    }

    fn show_home(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let smoothed = self.scroll_spring.value().clamp(0.0, 1.0);
        let (raw_progress, action) =
            hero::show(ui, &self.frames, self.sequence_loaded, smoothed);

        // Feed the raw progress through the spring for next frame's paint.
        self.scroll_spring.set_target(raw_progress);
        self.scroll_spring.step(ctx.input(|i| i.stable_dt));
        if !self.scroll_spring.is_settled() {
            ctx.request_repaint();
        }

        if let hero::HeroAction::ViewCollection = action {
            self.page = Page::Collection;
        }
    }

    fn show_product(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, id: &str) {
        let Some(product) = self.catalog.by_id(id).cloned() else {
            log::warn!("Unknown product id {}, returning to collection", id);
            self.page = Page::Collection;
            return;
        };

        let now = ctx.input(|i| i.time);
        let added = self.added_until.is_some_and(|until| now < until);

        let action = product::show(
            ui,
            &product,
            self.product_textures.get(id),
            &mut self.pending_quantity,
            added,
        );

        match action {
            product::ProductAction::AddToCart(quantity) => {
                self.cart.add_to_cart(&product, quantity);
                self.added_until = Some(now + ADDED_CONFIRMATION_SECS);
                ctx.request_repaint_after(std::time::Duration::from_secs_f64(
                    ADDED_CONFIRMATION_SECS,
                ));
            }
            product::ProductAction::Back => self.page = Page::Collection,
            product::ProductAction::None => {}
        }
    }

    fn show_cart(&mut self, ui: &mut egui::Ui) {
        let action = cart::show(
            ui,
            self.cart.items(),
            self.cart.total_price(),
            &self.product_textures,
        );

        match action {
            cart::CartAction::UpdateQuantity(id, quantity) => {
                self.cart.update_quantity(&id, quantity);
            }
            cart::CartAction::Remove(id) => self.cart.remove_from_cart(&id),
            cart::CartAction::Clear => self.cart.clear(),
            cart::CartAction::ContinueShopping => self.page = Page::Collection,
            cart::CartAction::None => {}
        }
    }
}

impl eframe::App for ReplicaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loaders(ctx);

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            navbar::show(ui, &mut self.page, self.cart.total_items());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| match self.page.clone() {
                Page::Home => self.show_home(ui, ctx),
                Page::Collection => {
                    if let Some(id) = collection::show(ui, &self.catalog, &self.product_textures)
                    {
                        self.open_product(id);
                    }
                }
                Page::Product(id) => self.show_product(ui, ctx, &id),
                Page::Cart => self.show_cart(ui),
                Page::Info => info::show(ui),
            });
    }
}
