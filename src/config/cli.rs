use crate::core::Storage;
use crate::utils::error::{Result, ToolkitError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        Path::new(&self.base_path).join(path).exists()
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(full_path).map_err(|e| ToolkitError::from_io(path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ToolkitError::from_io(path, e))?;
        }

        fs::write(full_path, data).map_err(|e| ToolkitError::from_io(path, e))?;
        Ok(())
    }
}
