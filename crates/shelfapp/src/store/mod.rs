//! # Storage Layer
//!
//! This module defines the storage abstraction for the product catalog. The
//! [`DataStore`] trait is what the command layer talks to; the
//! [`backend::StorageBackend`] trait is the raw I/O underneath it.
//!
//! ## Whole-Catalog Operations
//!
//! Every operation works on the entire [`Catalog`] as a unit:
//!
//! - **Reads** load and parse the full document and hand back an owned snapshot.
//!   Mutating the snapshot never touches persisted state.
//! - **Writes** are load → mutate in memory → persist the full document.
//!   Nothing is persisted until the in-memory mutation is complete.
//!
//! ## Lenient Reads
//!
//! A document that cannot be read or parsed is treated as an empty catalog so
//! that public listings keep working. Each such fallback is logged at `warn`
//! and counted in [`ReadDiagnostics`], which is how operators notice that the
//! catalog they are looking at is not the one on disk. `doctor` performs the
//! strict version of the same read.
//!
//! ## Concurrency
//!
//! Stores are single-writer. Two writers that interleave their load and persist
//! steps lose one of the updates. Callers that serve concurrent requests must
//! serialize mutations (the HTTP server holds the API behind a mutex).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over `FsBackend` (`data/products.json`).
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! └── products.json       # { "<category>": [ <product>, ... ], ... }
//! ```

use crate::error::Result;
use crate::model::{Catalog, NewProduct, Product};
use serde::Serialize;
use std::path::PathBuf;

pub mod backend;
pub mod catalog_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Running record of reads that fell back to an empty catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadDiagnostics {
    pub failed_reads: u64,
    pub last_error: Option<String>,
}

/// Report from the `doctor` operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthReport {
    pub location: PathBuf,
    pub exists: bool,
    /// Parse or I/O error of the strict read, if any.
    pub error: Option<String>,
    pub categories: usize,
    pub products: usize,
    pub empty_categories: Vec<String>,
    /// `(category, id)` pairs that appear more than once.
    pub duplicate_ids: Vec<(String, u64)>,
    /// Products whose `category` field disagrees with the key they are stored under.
    pub misfiled: Vec<(String, u64)>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.error.is_none() && self.duplicate_ids.is_empty() && self.misfiled.is_empty()
    }
}

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Full catalog snapshot. Never fails: unreadable documents read as empty.
    fn load_catalog(&self) -> Catalog;

    /// Products of one category in rank order; empty if the key is absent.
    fn list_category(&self, category: &str) -> Vec<Product>;

    /// Category keys currently present (including ones with no products left).
    fn categories(&self) -> Vec<String>;

    /// Assign the next per-category id, append, persist. Returns the stored product.
    fn add_product(&mut self, product: NewProduct) -> Result<Product>;

    /// Remove one product and return it. `Ok(None)` when nothing matched.
    fn delete_product(&mut self, category: &str, id: u64) -> Result<Option<Product>>;

    /// Persist an empty catalog if none exists yet. Returns true if one was created.
    fn init(&mut self) -> Result<bool>;

    /// Strict read of the document, reporting problems instead of hiding them.
    fn check(&self) -> HealthReport;

    /// Fallbacks taken by lenient reads so far.
    fn diagnostics(&self) -> ReadDiagnostics;

    /// Where the catalog is persisted.
    fn location(&self) -> PathBuf;
}
