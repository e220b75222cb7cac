use crate::adapters::storage::LocalStorage;
use crate::adapters::PROJECTS_FILE;
use crate::domain::ports::{DocumentFetcher, Storage};
use crate::utils::error::{CardsError, Result};
use async_trait::async_trait;
use std::path::Path;

/// 從儲存空間讀取 `projects.json`，用於產生靜態網站
#[derive(Debug, Clone)]
pub struct FileFetcher<S: Storage> {
    storage: S,
    file: String,
}

impl<S: Storage> FileFetcher<S> {
    pub fn new(storage: S) -> Self {
        Self::with_file(storage, PROJECTS_FILE)
    }

    pub fn with_file(storage: S, file: impl Into<String>) -> Self {
        Self {
            storage,
            file: file.into(),
        }
    }
}

impl FileFetcher<LocalStorage> {
    /// `location` 可以是目錄，或直接指向 `.json` 檔
    pub fn from_location(location: &str) -> Self {
        let path = Path::new(location);
        let is_json = path.extension().is_some_and(|ext| ext == "json");

        match (is_json, path.file_name().and_then(|name| name.to_str())) {
            (true, Some(name)) => {
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                Self::with_file(LocalStorage::new(dir), name)
            }
            _ => Self::new(LocalStorage::new(path)),
        }
    }
}

#[async_trait]
impl<S: Storage> DocumentFetcher for FileFetcher<S> {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Reading project data from file: {}", self.file);
        let data = self.storage.read_file(&self.file).await?;

        let text = String::from_utf8(data).map_err(|e| {
            CardsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        // 與 HTTP 來源一致，去掉開頭的 BOM
        Ok(match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}
