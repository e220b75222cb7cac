use crate::utils::error::{CardsError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> CardsError {
    CardsError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// 資料來源：http(s) 網址需有主機名稱，本機路徑不可為空
pub fn validate_source(field: &str, location: &str) -> Result<()> {
    if location.trim().is_empty() {
        return Err(invalid(field, location, "Source cannot be empty"));
    }

    if !is_remote(location) {
        return reject_nul(field, location);
    }

    let url = Url::parse(location).map_err(|e| invalid(field, location, format!("Invalid URL: {}", e)))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field, location, "URL has no host"));
    }
    Ok(())
}

/// 輸出位置必須指向一個檔案
pub fn validate_output_path(field: &str, path: &str) -> Result<()> {
    reject_nul(field, path)?;
    if Path::new(path).file_name().is_none() {
        return Err(invalid(field, path, "Output path must name a file"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

fn reject_nul(field: &str, path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(invalid(field, path, "Path contains null bytes"));
    }
    Ok(())
}
