use super::catalog_store::CatalogStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = CatalogStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        CatalogStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Product, ProductDraft, PLACEHOLDER_IMAGE};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Add a product with only the required fields set.
        pub fn with_product(mut self, category: &str, name: &str) -> Self {
            self.add(category, name);
            self
        }

        pub fn add(&mut self, category: &str, name: &str) -> Product {
            let link = format!("https://example.com/{}", name.to_lowercase().replace(' ', "-"));
            let new = ProductDraft::new(category, name, link)
                .into_new_product(PLACEHOLDER_IMAGE)
                .expect("fixture draft is valid");
            self.store
                .add_product(new)
                .expect("in-memory save cannot fail")
        }
    }
}
