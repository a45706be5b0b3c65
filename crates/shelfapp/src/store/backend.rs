use crate::error::Result;
use crate::model::Catalog;
use std::path::PathBuf;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CatalogStore handles the "what" (id assignment, lenient reads, health checks).
pub trait StorageBackend {
    /// Create whatever has to exist before the document can be written (directories).
    fn prepare(&self) -> Result<()>;

    /// Load and parse the catalog document.
    /// Returns Ok(None) if no document has been persisted yet.
    /// Returns Err on I/O failures and on documents that do not parse.
    fn load_catalog(&self) -> Result<Option<Catalog>>;

    /// Persist the entire catalog.
    /// MUST be all-or-nothing (e.g. write to tmp then rename) so readers never see a partial document.
    fn save_catalog(&self, catalog: &Catalog) -> Result<()>;

    /// Where the document lives. For FsBackend, the real path. For MemBackend, a virtual one.
    fn location(&self) -> PathBuf;
}
