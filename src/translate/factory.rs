use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::echo::EchoTranslator;
use super::interface::TranslateInterface;
use super::model::ModelTranslator;
use crate::config::TranslatorConfig;
use crate::languages::LanguageRegistry;
use crate::model_service::ModelServiceClient;

/// Factory for creating translators
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on configuration
    ///
    /// # Arguments
    /// * `translator_config` - `translator` selects `"echo"` or `"model"`
    /// * `registry` - Language table shared with the web layer
    pub fn create_translator(
        translator_config: &TranslatorConfig,
        registry: Arc<LanguageRegistry>,
    ) -> Result<Arc<dyn TranslateInterface>> {
        info!("Initializing translator: {}", translator_config.translator);

        match translator_config.translator.as_str() {
            "echo" => Ok(Arc::new(EchoTranslator::new(registry))),
            "model" => {
                info!(
                    "Using model {} via {}",
                    translator_config.model_name, translator_config.model_service_url
                );
                let client = Arc::new(ModelServiceClient::new(
                    translator_config.model_service_url.clone(),
                ));
                Ok(Arc::new(
                    ModelTranslator::new(registry, client, translator_config.model_name.clone())
                        .with_max_length(translator_config.max_length),
                ))
            }
            other => Err(anyhow::anyhow!("Unsupported translator: {}", other)),
        }
    }
}
