use std::sync::Arc;

use handlebars::TemplateError;
use seo_llm::LLMClient;

use crate::seo::{seo_page::SeoPage, seo_service::SeoService};

#[derive(Clone)]
pub struct AppService {
    pub seo_service: SeoService,
}

impl AppService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        let seo_service = SeoService::new(llm_client);

        Self { seo_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub page: Arc<SeoPage>,
}

impl AppState {
    pub fn new(llm_client: Arc<LLMClient>) -> Result<Self, TemplateError> {
        Ok(Self {
            service: AppService::new(llm_client),
            page: Arc::new(SeoPage::new()?),
        })
    }
}
