use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::interface::TranslateInterface;
use crate::errors::TranslateError;
use crate::languages::LanguageRegistry;

/// Debug translator: returns the input text without touching a model.
///
/// Language names are still checked against the registry so the UI behaves
/// the same as with the real model.
pub struct EchoTranslator {
    registry: Arc<LanguageRegistry>,
}

impl EchoTranslator {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl TranslateInterface for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        source_name: &str,
        target_name: &str,
    ) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        self.registry.resolve(source_name)?;
        self.registry.resolve(target_name)?;
        debug!("Echoing {} bytes ({} -> {})", text.len(), source_name, target_name);

        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}
