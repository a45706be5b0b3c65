//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every catalog operation, whichever UI drives it (CLI, HTTP server).
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Validates** boundary payloads (required fields, ranges) before the store is touched
//! - **Applies defaults** (placeholder image, zero prices, derived discount)
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and formats nothing.
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`
//!
//! ## Concurrency
//!
//! Mutating methods take `&mut self`; a caller serving concurrent requests shares
//! the facade behind a mutex so each load-mutate-persist sequence runs alone.

use crate::commands;
use crate::error::Result;
use crate::model::{ProductDraft, PLACEHOLDER_IMAGE};
use crate::store::{DataStore, ReadDiagnostics};
use std::path::PathBuf;

/// The main API facade for catalog operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
    placeholder_image: String,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::list::all(&self.store)
    }

    pub fn list_category(&self, category: &str) -> Result<commands::CmdResult> {
        commands::list::category(&self.store, category)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::list::categories(&self.store)
    }

    /// Validates the draft, fills in defaults, then adds it.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<commands::CmdResult> {
        let product = draft.into_new_product(&self.placeholder_image)?;
        commands::create::run(&mut self.store, product)
    }

    /// An empty `affected_products` means nothing matched.
    pub fn delete_product(&mut self, category: &str, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, category, id)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.store)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn diagnostics(&self) -> ReadDiagnostics {
        self.store.diagnostics()
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::model::{Catalog, Product};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        ShelfApi::new(InMemoryStore::new()).with_placeholder_image("/img/none.png")
    }

    #[test]
    fn create_applies_configured_placeholder() {
        let mut api = api();
        let result = api
            .create_product(ProductDraft::new("gaming", "Controller", "https://example.com/c"))
            .unwrap();
        assert_eq!(result.affected_products[0].image, "/img/none.png");
    }

    #[test]
    fn form_payload_without_sale_price_is_not_fully_discounted() {
        let mut api = api();
        let draft: ProductDraft = serde_json::from_str(
            r#"{"category": "shoes", "name": "Runner", "affiliateLink": "https://example.com/r",
                "originalPrice": 200, "salePrice": 0}"#,
        )
        .unwrap();
        let result = api.create_product(draft).unwrap();
        assert_eq!(result.affected_products[0].discount, 0);
    }

    #[test]
    fn create_rejects_invalid_draft_without_touching_store() {
        let mut api = api();
        let err = api
            .create_product(ProductDraft {
                name: Some("No link".into()),
                category: Some("gaming".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert_eq!(api.store().backend().save_count(), 0);
    }

    #[test]
    fn delete_dispatches_by_category_and_id() {
        let mut api = api();
        api.create_product(ProductDraft::new("gaming", "A", "https://example.com/a"))
            .unwrap();
        api.create_product(ProductDraft::new("books", "B", "https://example.com/b"))
            .unwrap();

        let missed = api.delete_product("books", 2).unwrap();
        assert!(missed.affected_products.is_empty());

        let hit = api.delete_product("books", 1).unwrap();
        assert_eq!(hit.affected_products[0].name, "B");

        let all = api.list_all().unwrap().catalog.unwrap();
        assert_eq!(all["gaming"].len(), 1);
        assert!(all["books"].is_empty());
    }

    #[test]
    fn listings_reach_the_store() {
        let mut api = api();
        api.create_product(ProductDraft::new("laptops", "Ultrabook", "https://example.com/u"))
            .unwrap();
        assert_eq!(api.categories().unwrap().categories, vec!["laptops"]);
        assert_eq!(api.list_category("laptops").unwrap().listed_products.len(), 1);
        assert!(api.list_category("Laptops").unwrap().listed_products.is_empty());
    }

    #[test]
    fn file_backed_api_persists_between_instances() {
        use crate::store::fs::FileStore;
        use crate::test_utils::TestEnv;

        let mut env = TestEnv::new();
        env.api.init().unwrap();
        env.api
            .create_product(ProductDraft {
                original_price: Some(50.0),
                sale_price: Some(40.0),
                ..ProductDraft::new("fitness", "Kettlebell", "https://example.com/k")
            })
            .unwrap();

        let reopened = ShelfApi::new(FileStore::new(env.data_dir.clone()));
        let listed = reopened.list_category("fitness").unwrap().listed_products;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].discount, 20);
        assert!(reopened.doctor().unwrap().health.unwrap().is_healthy());
    }
}
