use crate::api::ShelfApi;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub api: ShelfApi<FileStore>,
    pub data_dir: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let api = ShelfApi::new(FileStore::new(data_dir.clone()));
        Self {
            _temp_dir: temp_dir,
            api,
            data_dir,
        }
    }
}
