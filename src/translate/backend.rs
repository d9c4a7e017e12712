use anyhow::Result;
use async_trait::async_trait;

use crate::model_service::GenerationRequest;

/// The pretrained model and its tokenizer, seen as one opaque call.
///
/// Implementations must return the decoded lines in input order; special
/// tokens are already stripped.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<String>>;

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
