use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::GenerateError;
use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GeneratorConfig;

/// Anything that turns one prompt into one text body
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: String) -> Result<String, GenerateError>;
}

/// Chat-completions client for OpenAI-compatible endpoints
pub struct OpenAiClient {
    http: Client,
    config: GeneratorConfig,
}

impl OpenAiClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn build_request(&self, prompt: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model_id.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_output_size,
        }
    }
}

/// Prefer the structured `error.message`, fall back to the raw body
fn error_from_body(status: u16, body: &[u8]) -> GenerateError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => GenerateError::Api {
            status,
            message: parsed.error.message,
        },
        Err(_) => GenerateError::ServerError {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, prompt: String) -> Result<String, GenerateError> {
        let req = self.build_request(prompt);

        let response = self
            .http
            .post(self.config.url("chat/completions"))
            .bearer_auth(self.config.api_key())
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &bytes));
        }

        let res: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        let content = res
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerateError::EmptyResponse)?;

        debug!(bytes = content.len(), "Completion received");
        Ok(content)
    }
}
