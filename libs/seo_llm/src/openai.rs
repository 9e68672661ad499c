use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;

use crate::{ChatMessage, ChatRequest, ChatRole, ChatService, LlmError};

impl From<OpenAIError> for LlmError {
    fn from(error: OpenAIError) -> Self {
        match error {
            OpenAIError::JSONDeserialize(e) => LlmError::MalformedResponse(e.to_string()),
            other => LlmError::Request(other.to_string()),
        }
    }
}

pub struct OpenAIService {
    client: Client<OpenAIConfig>,
}

impl OpenAIService {
    pub fn new(api_key: String, org_id: Option<String>, api_base: Option<String>) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(org_id) = org_id {
            config = config.with_org_id(org_id);
        }
        if let Some(api_base) = api_base {
            config = config.with_api_base(api_base);
        }
        // Single attempt per request, 429 and 5xx included.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let client = Client::with_config(config).with_backoff(no_retry);
        Self { client }
    }

    fn to_openai_message(message: &ChatMessage) -> ChatCompletionRequestMessage {
        match message.role {
            ChatRole::System => {
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    content: message.content.clone().into(),
                    name: None,
                })
            }
            ChatRole::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: message.content.clone().into(),
                name: None,
            }),
        }
    }

    // `max_tokens` is deprecated upstream in favour of `max_completion_tokens`,
    // which older chat models reject.
    #[allow(deprecated)]
    fn build_request(request: &ChatRequest) -> Result<CreateChatCompletionRequest, LlmError> {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect();

        let request = CreateChatCompletionRequestArgs::default()
            .model(request.settings.model.as_str())
            .messages(messages)
            .temperature(request.settings.temperature)
            .max_tokens(request.settings.max_tokens)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl ChatService for OpenAIService {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let request = Self::build_request(request)?;
        let response = self.client.chat().create(request).await?;

        if let Some(usage) = &response.usage {
            tracing::info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI usage"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::malformed("No choices in OpenAI response"))?
            .message
            .content
            .ok_or_else(|| LlmError::malformed("No content in OpenAI response"))
    }
}
