use std::{env, net::SocketAddr};

use seo_llm::LLMProvider;

use crate::error::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_ENVIRONMENT: &str = "dev";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_api_base: Option<String>,
    pub environment: String,
    pub bind_address: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let openai_api_key = read("OPENAI_API_KEY").ok_or_else(|| {
            ConfigError::MissingCredential("OPENAI_API_KEY is not set".to_string())
        })?;

        let bind_address = read("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "BIND_ADDRESS".to_string(),
                    value: bind_address.clone(),
                })?;

        Ok(Self {
            openai_api_key,
            openai_org_id: read("OPENAI_ORG_ID"),
            openai_api_base: read("OPENAI_API_BASE"),
            environment: read("APP_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            bind_address,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }

    pub fn llm_provider(&self) -> LLMProvider {
        LLMProvider::OpenAI {
            api_key: self.openai_api_key.clone(),
            org_id: self.openai_org_id.clone(),
            api_base: self.openai_api_base.clone(),
        }
    }
}
