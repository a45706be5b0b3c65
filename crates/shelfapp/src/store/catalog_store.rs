use super::backend::StorageBackend;
use super::{DataStore, HealthReport, ReadDiagnostics};
use crate::error::{Result, ShelfError};
use crate::model::{next_id, Catalog, NewProduct, Product};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

pub struct CatalogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    diagnostics: RefCell<ReadDiagnostics>,
}

impl<B: StorageBackend> CatalogStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            diagnostics: RefCell::new(ReadDiagnostics::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Lenient read. The flag is true when the document existed but could not be used.
    fn read(&self) -> (Catalog, bool) {
        if let Err(e) = self.backend.prepare() {
            tracing::warn!(error = %e, "could not prepare catalog directory");
        }

        match self.backend.load_catalog() {
            Ok(Some(catalog)) => (catalog, false),
            Ok(None) => (Catalog::new(), false),
            Err(e) => {
                tracing::warn!(
                    location = %self.backend.location().display(),
                    error = %e,
                    "error reading products file, serving empty catalog"
                );
                let mut diagnostics = self.diagnostics.borrow_mut();
                diagnostics.failed_reads += 1;
                diagnostics.last_error = Some(e.to_string());
                (Catalog::new(), true)
            }
        }
    }

    /// Read for a mutation that will overwrite the document.
    fn read_for_write(&self) -> Catalog {
        let (catalog, recovered) = self.read();
        if recovered {
            tracing::warn!(
                location = %self.backend.location().display(),
                "unreadable products file will be replaced by this write"
            );
        }
        catalog
    }

    fn persist(&self, catalog: &Catalog) -> Result<()> {
        self.backend.save_catalog(catalog).map_err(|e| {
            tracing::error!(error = %e, "error writing products file");
            ShelfError::WriteFailure(e.to_string())
        })
    }
}

impl<B: StorageBackend> DataStore for CatalogStore<B> {
    fn load_catalog(&self) -> Catalog {
        self.read().0
    }

    fn list_category(&self, category: &str) -> Vec<Product> {
        self.load_catalog().remove(category).unwrap_or_default()
    }

    fn categories(&self) -> Vec<String> {
        self.load_catalog().into_keys().collect()
    }

    fn add_product(&mut self, product: NewProduct) -> Result<Product> {
        let mut catalog = self.read_for_write();
        let products = catalog.entry(product.category.clone()).or_default();

        let id = next_id(products).ok_or_else(|| {
            ShelfError::Store(format!("no ids left in category {}", product.category))
        })?;
        let product = Product::from_new(id, product);
        products.push(product.clone());

        self.persist(&catalog)?;
        tracing::info!(category = %product.category, id = product.id, "product added");
        Ok(product)
    }

    fn delete_product(&mut self, category: &str, id: u64) -> Result<Option<Product>> {
        let mut catalog = self.read_for_write();

        let Some(products) = catalog.get_mut(category) else {
            return Ok(None);
        };
        let Some(position) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = products.remove(position);

        self.persist(&catalog)?;
        tracing::info!(category, id, "product deleted");
        Ok(Some(removed))
    }

    fn init(&mut self) -> Result<bool> {
        self.backend.prepare()?;
        match self.backend.load_catalog() {
            Ok(Some(_)) => Ok(false),
            Ok(None) => {
                self.persist(&Catalog::new())?;
                Ok(true)
            }
            // Never overwrite a document we cannot read
            Err(e) => Err(ShelfError::Store(format!(
                "existing products file is unreadable: {e}"
            ))),
        }
    }

    fn check(&self) -> HealthReport {
        let mut report = HealthReport {
            location: self.backend.location(),
            ..Default::default()
        };

        let catalog = match self.backend.load_catalog() {
            Ok(Some(catalog)) => {
                report.exists = true;
                catalog
            }
            Ok(None) => return report,
            Err(e) => {
                report.exists = true;
                report.error = Some(e.to_string());
                return report;
            }
        };

        report.categories = catalog.len();
        for (key, products) in &catalog {
            report.products += products.len();
            if products.is_empty() {
                report.empty_categories.push(key.clone());
            }

            let mut seen = HashSet::new();
            for product in products {
                if !seen.insert(product.id) {
                    report.duplicate_ids.push((key.clone(), product.id));
                }
                if &product.category != key {
                    report.misfiled.push((key.clone(), product.id));
                }
            }
        }
        report
    }

    fn diagnostics(&self) -> ReadDiagnostics {
        self.diagnostics.borrow().clone()
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
