use std::sync::Arc;

use anyhow::Context;
use uuid::Uuid;

use crate::config::Config;
use crate::languages::LanguageRegistry;
use crate::translate::{TranslateInterface, TranslatorFactory};

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<LanguageRegistry>,
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = Arc::new(
            LanguageRegistry::from_config(config.languages.as_deref())
                .context("Invalid language table")?,
        );
        let translator =
            TranslatorFactory::create_translator(&config.translator_config, registry.clone())?;

        Ok(Self::with_translator(config, registry, translator))
    }

    pub fn with_translator(
        config: Config,
        registry: Arc<LanguageRegistry>,
        translator: Arc<dyn TranslateInterface>,
    ) -> Self {
        Self {
            config,
            registry,
            translator,
        }
    }

    pub fn generate_request_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
