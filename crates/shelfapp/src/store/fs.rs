use super::catalog_store::CatalogStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = CatalogStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        CatalogStore::with_backend(FsBackend::new(data_dir))
    }

    pub fn with_file_name(data_dir: PathBuf, file_name: &str) -> Self {
        CatalogStore::with_backend(FsBackend::new(data_dir).with_file_name(file_name))
    }
}
