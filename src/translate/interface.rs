use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::TranslateError;

/// JSON body of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Falls back to the registry's default source language when omitted
    pub source_lang: Option<String>,
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub success: bool,
}

/// Translate interface, selected at startup by `TranslatorFactory`
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` between two languages given by display name
    ///
    /// # Arguments
    /// * `text` - Source text, possibly spanning several lines
    /// * `source_name` - Display name of the source language (e.g. "English")
    /// * `target_name` - Display name of the target language (e.g. "Interslavic")
    ///
    /// # Returns
    /// The translated text, one output line per input line
    async fn translate(
        &self,
        text: &str,
        source_name: &str,
        target_name: &str,
    ) -> Result<String, TranslateError>;

    /// Short identifier used in logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Health of whatever sits behind the translator, `None` when nothing does
    async fn backend_healthy(&self) -> Option<bool> {
        None
    }
}
