use std::sync::Arc;

use seo_llm::{ChatMessage, ChatRequest, GenerationSettings, LLMClient, LlmError};

use super::seo_prompt::SeoPrompt;

pub const EMPTY_INPUT_MESSAGE: &str = "Будь ласка, введіть оригінальний опис відео.";
pub const FAILURE_PREFIX: &str = "Сталася помилка під час звернення до OpenAI API";

const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Turns a raw video description into an SEO article with meta title and
/// meta description.
#[derive(Clone)]
pub struct SeoService {
    llm_client: Arc<LLMClient>,
}

impl SeoService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        Self { llm_client }
    }

    /// Never fails: blank input and service errors both come back as
    /// displayable text.
    pub async fn transform(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return EMPTY_INPUT_MESSAGE.to_string();
        }

        match self.try_transform(input).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("SEO transformation failed: {}", e);
                format!("{}: {}", FAILURE_PREFIX, e)
            }
        }
    }

    /// One completion attempt for `input`, untrimmed. The generated text is
    /// returned without surrounding whitespace.
    pub async fn try_transform(&self, input: &str) -> Result<String, LlmError> {
        let request = Self::build_request(input);

        tracing::info!(input_chars = input.chars().count(), "Optimizing description");
        let text = self.llm_client.complete(&request).await?;
        let text = text.trim().to_string();
        tracing::info!(output_chars = text.chars().count(), "Optimization finished");

        Ok(text)
    }

    pub fn build_request(input: &str) -> ChatRequest {
        ChatRequest {
            settings: GenerationSettings {
                model: MODEL.to_string(),
                temperature: TEMPERATURE,
                max_tokens: MAX_TOKENS,
            },
            messages: vec![
                ChatMessage::system(SeoPrompt::SYSTEM_INSTRUCTION),
                ChatMessage::user(SeoPrompt::render(input)),
            ],
        }
    }
}
