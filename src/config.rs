use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config_manager::read_config_text;
use crate::languages::LanguageEntry;
use crate::translate::DEFAULT_MAX_LENGTH;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JSON-LD context, accepted and ignored
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub translator_config: TranslatorConfig,

    /// Replaces the built-in language table when present
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// `"model"` or `"echo"`
    #[serde(default = "default_translator")]
    pub translator: String,

    #[serde(default = "default_model_name")]
    pub model_name: String,

    #[serde(default = "default_model_service_url")]
    pub model_service_url: String,

    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

fn default_translator() -> String {
    "model".to_string()
}

fn default_model_name() -> String {
    "Salavat/nllb-200-distilled-600M-finetuned-isv_v2".to_string()
}

fn default_model_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

impl Config {
    /// Load from a JSON (`.json`, `.jsonld`) or YAML file
    pub fn load(path: &str) -> Result<Self> {
        let content = read_config_text(path)?;

        let path_lower = path.to_lowercase();
        let config = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON configuration: {}", path))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML configuration: {}", path))?
        };
        Ok(config)
    }

    /// Apply `MODEL_SERVICE_URL`, `TRANSLATOR` and `PORT` from the environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("MODEL_SERVICE_URL") {
            info!("MODEL_SERVICE_URL overrides model service: {}", url);
            self.translator_config.model_service_url = url;
        }
        if let Ok(translator) = std::env::var("TRANSLATOR") {
            info!("TRANSLATOR overrides translator: {}", translator);
            self.translator_config.translator = translator;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.system_config.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?;
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            translator: default_translator(),
            model_name: default_model_name(),
            model_service_url: default_model_service_url(),
            max_length: default_max_length(),
        }
    }
}
