// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Product catalog data structures.
//!
//! This module defines the read-only product catalog. Products are loaded
//! once at startup from the bundled YAML document and never mutated.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single product in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Unit price in EUR.
    pub price: f64,
    /// Image path relative to the asset directory.
    pub image: String,
    /// Stock ceiling; cart quantities are clamped to this.
    pub available_quantity: u32,
    pub description: String,
    pub notes: String,
    pub usage: String,
}

/// The read-only product catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse the catalog bundled into the binary.
    pub fn bundled() -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(include_str!("../../assets/products.yaml"))?;
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its identifier.
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by its URL-style slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }
}
