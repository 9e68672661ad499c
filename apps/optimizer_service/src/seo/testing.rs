use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use seo_llm::{ChatRequest, ChatService, LLMClient, LlmError};

/// Canned backend that records every request it receives.
#[derive(Clone)]
pub struct MockChatService {
    reply: Result<String, LlmError>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatService {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            reply: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> Arc<LLMClient> {
        Arc::new(LLMClient::with_service(Box::new(self.clone())))
    }
}

#[async_trait]
impl ChatService for MockChatService {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}
