use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Keeps the catalog as serialized JSON text, so loads go through the same
/// parsing path as the file backend and corrupt documents can be simulated.
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait can
/// take `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Replace the stored document with arbitrary text (e.g. invalid JSON).
    pub fn set_raw_document(&self, raw: &str) {
        *self.document.borrow_mut() = Some(raw.to_string());
    }

    /// The stored document text, if any.
    pub fn raw_document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn load_catalog(&self) -> Result<Option<Catalog>> {
        match self.document.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => {
                let catalog = serde_json::from_str(raw).map_err(ShelfError::Serialization)?;
                Ok(Some(catalog))
            }
        }
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string_pretty(catalog).map_err(ShelfError::Serialization)?;
        *self.document.borrow_mut() = Some(raw);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://products.json")
    }
}
