use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::translate::backend::ModelBackend;

/// HTTP client for the inference service hosting the seq2seq model.
///
/// The service owns the checkpoint and its tokenizer: it pads the batch,
/// forces the language tokens, runs generation and decodes the output.
#[derive(Debug, Clone)]
pub struct ModelServiceClient {
    client: Client,
    base_url: String,
}

/// One batched generation call. Each input line becomes one output line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Checkpoint identifier the service should use
    pub model: String,
    pub inputs: Vec<String>,
    /// Tag written over the first token of every input sequence
    pub src_lang: String,
    /// Tag forced as the first generated token
    pub tgt_lang: String,
    /// Maximum generated tokens per line
    pub max_length: u32,
    /// Pad to the longest line of the batch
    pub padding: String,
    pub skip_special_tokens: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub outputs: Vec<String>,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ModelServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        let url = format!("{}/translate/generate", self.base_url);
        debug!(
            "Sending generation request: lines={}, src={}, tgt={}",
            request.inputs.len(),
            request.src_lang,
            request.tgt_lang
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to send generation request to model service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Model service error ({}): {}", status, body);
        }

        let result: GenerationResponse = response
            .json()
            .await
            .context("Failed to parse model service response")?;

        if result.success {
            Ok(result.outputs)
        } else {
            let error_msg = result.error.unwrap_or_else(|| "Unknown error".to_string());
            error!("Model generation failed: {}", error_msg);
            Err(anyhow::anyhow!("Model generation failed: {}", error_msg))
        }
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl ModelBackend for ModelServiceClient {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<String>> {
        ModelServiceClient::generate(self, &request).await
    }

    async fn health_check(&self) -> Result<bool> {
        ModelServiceClient::health_check(self).await
    }
}
