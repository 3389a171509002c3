pub mod gemini;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use self::gemini::GeminiChatClient;

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request to LLM provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM provider returned status {status}: {body}")]
    Api {
        status: u16,
        body: String,
    },

    #[error("LLM provider response contained no candidate text")]
    EmptyResponse,
}

/// Completion seam for the conversation analyzer. One provider ships today;
/// tests substitute recording fakes through the same trait object.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> Option<String>;
}
