use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "products.json";

pub struct FsBackend {
    data_dir: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl StorageBackend for FsBackend {
    fn prepare(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn load_catalog(&self) -> Result<Option<Catalog>> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(Some(catalog))
    }

    fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        self.prepare()?;

        let content = serde_json::to_string_pretty(catalog).map_err(ShelfError::Serialization)?;

        // Atomic write: readers see either the old or the new document
        let tmp_file = self.data_dir.join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.catalog_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.catalog_path()
    }
}
