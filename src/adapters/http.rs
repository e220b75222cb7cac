use crate::adapters::PROJECTS_FILE;
use crate::domain::ports::DocumentFetcher;
use crate::utils::error::{CardsError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use url::Url;

/// 透過 HTTP 取得 `projects.json`，每次都要求來源重新回應
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: Url,
}

impl HttpFetcher {
    /// `base` 可以是站台目錄，或直接指向 `.json` 檔
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self::with_client(Client::new(), resolve_data_url(base)?))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

pub fn resolve_data_url(base: &str) -> Result<Url> {
    let invalid = |reason: String| CardsError::InvalidConfigValue {
        field: "source".to_string(),
        value: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    if url.path().ends_with(".json") {
        return Ok(url);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.join(PROJECTS_FILE)
        .map_err(|e| invalid(format!("Cannot resolve {}: {}", PROJECTS_FILE, e)))
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CardsError::Fetch {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
