//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use askpdf_core::{
    ChatMessage, ChatModel, Conversation, Embedder, Error, Result, CHAT_MODEL, EMBEDDING_DIMENSION,
    EMBEDDING_MODEL,
};

use crate::config::OpenAiConfig;

/// Whole-request timeout; no retries are attempted on expiry
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// OpenAI client serving both embeddings and chat completions
#[derive(Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
    embedding_model: String,
    chat_model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [&'a ChatMessage; 2],
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

impl OpenAiClient {
    /// Create a new OpenAI client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            config,
            client,
            embedding_model: EMBEDDING_MODEL.to_string(),
            chat_model: CHAT_MODEL.to_string(),
        })
    }

    /// Create a new OpenAI client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// `on_status` turns a non-auth HTTP failure into the caller's error variant.
    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        on_status: fn(String) -> Error,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "sending OpenAI request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, &error_text, on_status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        debug!(%status, bytes = body.len(), "received OpenAI response");

        serde_json::from_str(&body).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Map a failed HTTP status onto the error taxonomy
fn status_error(status: StatusCode, body: &str, on_status: fn(String) -> Error) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Authentication(format!("OpenAI API returned {}: {}", status, body))
        }
        _ => on_status(format!("OpenAI API request failed with status {}: {}", status, body)),
    }
}

#[async_trait]
impl Embedder for OpenAiClient {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: vec![text],
        };

        let response: EmbeddingResponse = self
            .post_json("embeddings", &request, Error::Embedding)
            .await?;

        response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| Error::Embedding("Empty embedding response".to_string()))
    }

    fn dimension(&self) -> u64 {
        EMBEDDING_DIMENSION
    }

    fn model_id(&self) -> &str {
        &self.embedding_model
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, conversation: &Conversation) -> Result<String> {
        let request = ChatRequest {
            model: &self.chat_model,
            messages: conversation.messages(),
        };

        let response: ChatResponse = self
            .post_json("chat/completions", &request, Error::Generation)
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Generation("Response contained no choices".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| Error::Generation("First choice has no text content".to_string()))
    }

    fn model_id(&self) -> &str {
        &self.chat_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_are_fixed() {
        let client = OpenAiClient::new(OpenAiConfig::new("sk-test".to_string())).unwrap();
        assert_eq!(Embedder::model_id(&client), "text-embedding-3-large");
        assert_eq!(ChatModel::model_id(&client), "gpt-4o-mini");
        assert_eq!(client.dimension(), 3072);
    }

    #[test]
    fn test_status_error_mapping() {
        let err = status_error(StatusCode::UNAUTHORIZED, "bad key", Error::Generation);
        assert!(matches!(err, Error::Authentication(_)));

        let err = status_error(StatusCode::FORBIDDEN, "no access", Error::Embedding);
        assert!(matches!(err, Error::Authentication(_)));

        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down", Error::Embedding);
        match err {
            Error::Embedding(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("slow down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_chat_request_shape() {
        let conversation = askpdf_core::build_conversation("ctx", "hello");
        let request = ChatRequest {
            model: CHAT_MODEL,
            messages: conversation.messages(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
