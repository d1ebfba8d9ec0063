//! OpenAI backend (Chat Completions API). Used as the secondary backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts::ANALYST_SYSTEM;
use super::{read_response, BackendError, TextGenerationBackend};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

impl ChatCompletionResponse {
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
    }
}

fn build_request(prompt: &str) -> ChatCompletionRequest<'_> {
    ChatCompletionRequest {
        model: MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: ANALYST_SYSTEM,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        max_tokens: MAX_TOKENS,
    }
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl TextGenerationBackend for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&build_request(prompt))
            .send()
            .await?;

        let body: ChatCompletionResponse = read_response(response).await?;

        if let Some(usage) = &body.usage {
            debug!(
                "OpenAI call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        body.text().ok_or(BackendError::EmptyContent)
    }
}
