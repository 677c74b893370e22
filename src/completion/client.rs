use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::prompt::{system_instruction, user_message};
use super::schema::DefinitionResult;
use super::traits::DefinitionProvider;
use crate::config::CompletionConfig;
use crate::error::{Error, Result};

const SCHEMA_NAME: &str = "definition_result";

/// Client for an OpenAI-compatible `chat/completions` endpoint, always asking
/// for schema-constrained output at temperature 0.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid completion base URL {:?}: {}", config.base_url, e))?;
        let endpoint = base_url
            .join("chat/completions")
            .map_err(|e| anyhow::anyhow!("Invalid completion endpoint: {}", e))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build completion HTTP client: {}", e))?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, word: &str, context: Option<&str>) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction(context),
                },
                ChatMessage {
                    role: "user",
                    content: user_message(word, context),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema: DefinitionResult::json_schema(),
                },
            },
        }
    }
}

#[async_trait]
impl DefinitionProvider for CompletionClient {
    async fn define(&self, word: &str, context: Option<&str>) -> Result<DefinitionResult> {
        let request = self.build_request(word, context);
        debug!(model = %self.model, path = self.endpoint.path(), "Completion API request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus { status, body });
        }

        let bytes = response.bytes().await?;
        let chat: ChatResponse = serde_json::from_slice(&bytes)?;
        let message = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| Error::ShapeMismatch("completion returned no choices".to_string()))?;

        if let Some(refusal) = message.refusal {
            return Err(Error::ShapeMismatch(format!("model refused: {refusal}")));
        }
        let content = message
            .content
            .ok_or_else(|| Error::ShapeMismatch("completion message has no content".to_string()))?;

        DefinitionResult::from_model_output(&content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
