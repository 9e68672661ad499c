use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    app_module::AppState,
    health::health_controller,
    seo::seo_controller::{seo_api_router, seo_page_router},
};

pub fn application_router() -> Router {
    Router::new()
        .merge(seo_page_router())
        .route("/v1/health", get(health_controller::health))
        .nest("/v1/seo", seo_api_router())
}

pub fn application(state: AppState) -> Router {
    application_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
            .into_inner(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{
        seo_page::EMPTY_FORM_WARNING,
        seo_service::{EMPTY_INPUT_MESSAGE, FAILURE_PREFIX},
        testing::MockChatService,
    };
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use seo_llm::LlmError;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(mock: &MockChatService) -> Router {
        application(AppState::new(mock.client()).unwrap())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/seo/optimize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock)
            .oneshot(Request::builder().uri("/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let v: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(v["status"], "ok");
    }

    #[tokio::test]
    async fn index_renders_empty_form() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let html = body_string(res).await;
        assert!(html.contains("Army TV Оптимізатор Тексту"));
        assert!(!html.contains("seo_text_output"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn form_submit_renders_result_and_keeps_input() {
        let mock = MockChatService::replying("  **Meta**  ");
        let res = app(&mock)
            .oneshot(form_post("original_text=daily+briefing"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let html = body_string(res).await;
        assert!(html.contains(">daily briefing</textarea>"));
        assert!(html.contains(">**Meta**</textarea>"));
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_form_shows_warning_without_call() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock).oneshot(form_post("original_text=")).await.unwrap();

        let html = body_string(res).await;
        assert!(html.contains(EMPTY_FORM_WARNING));
        assert!(!html.contains("seo_text_output"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_form_keeps_previous_result() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock)
            .oneshot(form_post("original_text=&previous_result=**Meta**%0Abody"))
            .await
            .unwrap();

        let html = body_string(res).await;
        assert!(html.contains(EMPTY_FORM_WARNING));
        assert!(html.contains(">**Meta**\nbody</textarea>"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn new_result_replaces_previous_one() {
        let mock = MockChatService::replying("fresh");
        let res = app(&mock)
            .oneshot(form_post("original_text=briefing&previous_result=stale"))
            .await
            .unwrap();

        let html = body_string(res).await;
        assert!(html.contains(">fresh</textarea>"));
        assert!(!html.contains("stale"));
    }

    #[tokio::test]
    async fn whitespace_form_shows_fixed_message_without_call() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock)
            .oneshot(form_post("original_text=+++"))
            .await
            .unwrap();

        let html = body_string(res).await;
        assert!(html.contains(EMPTY_INPUT_MESSAGE));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn api_returns_generated_text() {
        let mock = MockChatService::replying("\n**Мета-заголовок:**\nX\n");
        let res = app(&mock)
            .oneshot(json_post(r#"{"description": "Фронтова зведення за день"}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let v: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(v["result"], "**Мета-заголовок:**\nX");
    }

    #[tokio::test]
    async fn api_reports_service_failure_as_result() {
        let mock = MockChatService::failing(LlmError::request("rate limit"));
        let res = app(&mock)
            .oneshot(json_post(r#"{"description": "опис"}"#))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let v: Value = serde_json::from_str(&body_string(res).await).unwrap();
        let result = v["result"].as_str().unwrap();
        assert!(result.starts_with(FAILURE_PREFIX));
        assert!(result.contains("rate limit"));
    }

    #[tokio::test]
    async fn api_rejects_malformed_json() {
        let mock = MockChatService::replying("unused");
        let res = app(&mock).oneshot(json_post("{")).await.unwrap();

        assert!(res.status().is_client_error());
        assert!(mock.requests().is_empty());
    }
}
