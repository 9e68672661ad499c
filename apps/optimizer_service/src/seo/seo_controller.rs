use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Extension, Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use super::seo_page::{PageView, EMPTY_FORM_WARNING};
use crate::app_module::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeForm {
    #[serde(default)]
    pub original_text: String,
    /// Last result shown on the page, echoed back by the form.
    #[serde(default)]
    pub previous_result: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub result: String,
}

pub fn seo_page_router() -> Router {
    Router::new().route("/", get(show_page).post(submit_page))
}

pub fn seo_api_router() -> Router {
    Router::new().route("/optimize", post(optimize))
}

pub async fn show_page(Extension(ctx): Extension<AppState>) -> Response {
    render_page(&ctx, PageView::new(String::new()))
}

pub async fn submit_page(
    Extension(ctx): Extension<AppState>,
    Form(form): Form<OptimizeForm>,
) -> Response {
    let view = if form.original_text.is_empty() {
        PageView::new(form.original_text)
            .with_result(form.previous_result)
            .with_warning(EMPTY_FORM_WARNING)
    } else {
        let result = ctx
            .service
            .seo_service
            .transform(&form.original_text)
            .await;
        PageView::new(form.original_text).with_result(result)
    };

    render_page(&ctx, view)
}

pub async fn optimize(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> impl IntoResponse {
    let result = ctx.service.seo_service.transform(&request.description).await;
    (StatusCode::OK, Json(OptimizeResponse { result }))
}

fn render_page(ctx: &AppState, view: PageView) -> Response {
    match ctx.page.render(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Error rendering page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render page: {}", e),
            )
                .into_response()
        }
    }
}
