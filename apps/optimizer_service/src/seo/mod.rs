pub mod seo_controller;
pub mod seo_page;
pub mod seo_prompt;
pub mod seo_service;

#[cfg(test)]
pub(crate) mod testing;
