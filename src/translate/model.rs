use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::backend::ModelBackend;
use super::interface::TranslateInterface;
use super::lines::{append_trailing_space, join_lines, split_lines};
use crate::errors::TranslateError;
use crate::languages::LanguageRegistry;
use crate::model_service::GenerationRequest;

/// Generated tokens allowed per line
pub const DEFAULT_MAX_LENGTH: u32 = 400;

/// Translator backed by the seq2seq model.
///
/// All lines of a request go to the model as a single batch, so an input of
/// `k` lines comes back as `k` lines as long as the model emits one decoded
/// sequence per input sequence.
pub struct ModelTranslator {
    registry: Arc<LanguageRegistry>,
    backend: Arc<dyn ModelBackend>,
    model_name: String,
    max_length: u32,
}

impl ModelTranslator {
    pub fn new(
        registry: Arc<LanguageRegistry>,
        backend: Arc<dyn ModelBackend>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            backend,
            model_name: model_name.into(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    fn build_request(&self, inputs: Vec<String>, src_tag: &str, tgt_tag: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.model_name.clone(),
            inputs,
            src_lang: src_tag.to_string(),
            tgt_lang: tgt_tag.to_string(),
            max_length: self.max_length,
            padding: "longest".to_string(),
            skip_special_tokens: true,
        }
    }
}

#[async_trait]
impl TranslateInterface for ModelTranslator {
    async fn translate(
        &self,
        text: &str,
        source_name: &str,
        target_name: &str,
    ) -> Result<String, TranslateError> {
        // Empty input makes the model hallucinate; never send it
        if text.is_empty() {
            return Ok(String::new());
        }

        let inputs = append_trailing_space(&split_lines(text));
        let src_tag = self.registry.resolve(source_name)?;
        let tgt_tag = self.registry.resolve(target_name)?;

        let line_count = inputs.len();
        debug!(
            "Translating {} line(s) {} ({}) -> {} ({})",
            line_count, source_name, src_tag, target_name, tgt_tag
        );

        let request = self.build_request(inputs, src_tag, tgt_tag);
        let outputs = self
            .backend
            .generate(request)
            .await
            .map_err(TranslateError::ModelInvocation)?;

        if outputs.len() != line_count {
            warn!(
                "Model returned {} line(s) for {} input line(s)",
                outputs.len(),
                line_count
            );
        }

        Ok(join_lines(&outputs))
    }

    fn name(&self) -> &'static str {
        "model"
    }

    async fn backend_healthy(&self) -> Option<bool> {
        Some(self.backend.health_check().await.unwrap_or(false))
    }
}
