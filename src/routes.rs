use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, info_span, warn, Instrument};

use crate::errors::TranslateError;
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};
use crate::ui::{self, PageState};

/// Fields posted by the HTML form
#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    pub from: String,
    pub to: String,
}

/// Full application: routes, request tracing and CORS
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // UI
        .route("/", get(index))
        .route("/translate", post(translate_form))
        // JSON API
        .route("/api/translate", post(translate_api))
        .route("/api/languages", get(list_languages))
        // Health check
        .route("/api/health", get(health_check))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_index(&state.registry))
}

async fn translate_form(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> (StatusCode, Html<String>) {
    // Browsers submit textarea line breaks as CRLF
    let text = form.text.replace("\r\n", "\n");

    let outcome = run_translation(&state, &text, &form.from, &form.to).await;
    let (status, result, error) = match &outcome {
        Ok(translated) => (StatusCode::OK, translated.as_str(), None),
        Err(e) => (e.status_code(), "", Some(e.to_string())),
    };

    let page = ui::render_page(
        &state.registry,
        &PageState {
            text: &text,
            source: &form.from,
            target: &form.to,
            result,
            error: error.as_deref(),
        },
    );
    (status, Html(page))
}

async fn translate_api(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<Value>)> {
    let source = payload
        .source_lang
        .as_deref()
        .unwrap_or_else(|| state.registry.default_source());

    match run_translation(&state, &payload.text, source, &payload.target_lang).await {
        Ok(translated_text) => Ok(Json(TranslateResponse {
            translated_text,
            success: true,
        })),
        Err(e) => Err((
            e.status_code(),
            Json(json!({
                "error": e.to_string(),
                "success": false
            })),
        )),
    }
}

async fn list_languages(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "languages": state.registry.entries(),
        "default_source": state.registry.default_source(),
        "default_target": state.registry.default_target(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let model_service = state.translator.backend_healthy().await;
    Json(json!({
        "status": "ok",
        "translator": state.translator.name(),
        "model_service": model_service
    }))
}

/// One translation, logged under its own request id
async fn run_translation(
    state: &AppState,
    text: &str,
    source: &str,
    target: &str,
) -> Result<String, TranslateError> {
    let span = info_span!("translate", request_id = %state.generate_request_id());

    async {
        info!("Translation requested: {} -> {} ({} bytes)", source, target, text.len());
        let result = state.translator.translate(text, source, target).await;
        match &result {
            Ok(_) => info!("Translation finished"),
            Err(TranslateError::UnknownLanguage { name }) => {
                warn!("Rejected unknown language: {}", name)
            }
            Err(e) => error!("Translation failed: {:#}", e),
        }
        result
    }
    .instrument(span)
    .await
}
