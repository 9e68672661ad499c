use async_trait::async_trait;

pub mod error;
pub mod openai;

pub use error::LlmError;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    OpenAI {
        api_key: String,
        org_id: Option<String>,
        api_base: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub settings: GenerationSettings,
    pub messages: Vec<ChatMessage>,
}

/// A chat-style completion backend. Implementations send the ordered
/// messages once and return the generated text untouched.
#[async_trait]
pub trait ChatService {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// Process-wide handle to the configured backend. Built once at startup and
/// shared read-only afterwards.
pub struct LLMClient {
    service: Box<dyn ChatService + Send + Sync>,
}

impl LLMClient {
    pub fn new(provider: LLMProvider) -> Self {
        let service: Box<dyn ChatService + Send + Sync> = match provider {
            LLMProvider::OpenAI {
                api_key,
                org_id,
                api_base,
            } => Box::new(openai::OpenAIService::new(api_key, org_id, api_base)),
        };

        Self { service }
    }

    pub fn with_service(service: Box<dyn ChatService + Send + Sync>) -> Self {
        Self { service }
    }

    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        tracing::debug!(
            model = %request.settings.model,
            messages = request.messages.len(),
            "Dispatching chat completion"
        );

        let result = self.service.complete(request).await;
        if let Err(e) = &result {
            tracing::warn!("Chat completion failed: {}", e);
        }
        result
    }
}
