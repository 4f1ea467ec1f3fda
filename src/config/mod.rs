#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_url, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const BASE_URL_ENV: &str = "AGRI_API_URL";
pub const API_KEY_ENV: &str = "AGRI_API_KEY";

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;

    /// `{base_url}/api`
    fn api_root(&self) -> String {
        format!("{}/api", self.base_url())
    }
}

/// 啟動時解析一次，之後唯讀
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
}

impl ClientConfig {
    /// Empty values count as unset; trailing slashes are trimmed from the URL.
    pub fn new(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        Self { base_url, api_key }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::new(base_url.as_deref(), api_key.as_deref())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let file: ConfigFile = toml::from_str(&processed).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        Ok(Self::new(
            file.api.base_url.as_deref(),
            file.api.api_key.as_deref(),
        ))
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        if let Some(key) = &self.api_key {
            validate_non_empty_string("api.api_key", key)?;
            validate_header_value("api.api_key", key)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    api_key: Option<String>,
}

/// 替換環境變數 (例如 ${AGRI_API_KEY})，未設定的保留原樣
fn substitute_env_vars(content: &str) -> String {
    let re = match Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
