use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CardsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_output_path, validate_source, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// 網址或本機目錄
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_title() -> String {
    "Projects".to_string()
}

fn default_output_path() -> String {
    "./index.html".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CardsError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CardsError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for SiteConfig {
    fn source_location(&self) -> &str {
        &self.source.location
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn page_title(&self) -> &str {
        &self.page.title
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_source("source.location", &self.source.location)?;
        validate_output_path("output.path", &self.output.path)?;
        validate_non_empty_string("page.title", &self.page.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[source]
location = "https://example.com/portfolio/"
"#,
        )
        .unwrap();

        assert_eq!(config.source_location(), "https://example.com/portfolio/");
        assert_eq!(config.page_title(), "Projects");
        assert_eq!(config.output_path(), "./index.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[source]
location = "./site"

[page]
title = "My Work"

[output]
path = "./public/index.html"
"#,
        )
        .unwrap();

        assert_eq!(config.page_title(), "My Work");
        assert_eq!(config.output_path(), "./public/index.html");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROJECT_CARDS_TEST_SITE", "https://cards.example.com");
        let config = SiteConfig::from_toml_str(
            r#"
[source]
location = "${PROJECT_CARDS_TEST_SITE}/"
"#,
        )
        .unwrap();

        assert_eq!(config.source_location(), "https://cards.example.com/");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = SiteConfig::from_toml_str(
            r#"
[source]
location = "${PROJECT_CARDS_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.source_location(), "${PROJECT_CARDS_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let err = SiteConfig::from_toml_str("[page]\ntitle = \"x\"\n").unwrap_err();
        assert!(matches!(err, CardsError::Config { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = SiteConfig::from_toml_str(
            r#"
[source]
location = "https://"

[page]
title = "  "
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
