use super::types::OutcomeResponse;
use crate::config::Config;
use crate::fillmask::{FillMaskClient, FillMaskRequest};
use crate::translate::{NO_TRANSLATION, TranslateClient, Translation, TranslationRequest};
use axum::{
    extract::State,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub translate: Arc<TranslateClient>,
    pub fillmask: Arc<FillMaskClient>,
}

impl AppState {
    /// Build both adapters from the resolved configuration. The routing
    /// targets are fixed for the process lifetime.
    pub fn new(config: &Config) -> Self {
        Self {
            translate: Arc::new(TranslateClient::new(config.gateway.translate_target())),
            fillmask: Arc::new(FillMaskClient::new(config.gateway.fillmask_target())),
        }
    }
}

/// The two-panel page; everything interactive goes through the JSON
/// endpoints below.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Json<OutcomeResponse> {
    info!(
        "Received translation request: {} -> {}",
        request.source_language, request.target_language
    );

    // Preconditions live here, not in the adapter: on violation no HTTP
    // call is made and the panel shows a warning.
    if let Err(e) = request.validate() {
        warn!("Translation request rejected: {}", e);
        return Json(OutcomeResponse::warning(e.to_string()));
    }

    match state.translate.translate(&request).await {
        Ok(Translation::Text(text)) => Json(OutcomeResponse::success(text)),
        Ok(Translation::Placeholder) => Json(OutcomeResponse::warning(NO_TRANSLATION)),
        Err(e) => {
            error!("Translation request failed: {}", e);
            Json(OutcomeResponse::error(e.to_string()))
        }
    }
}

pub async fn fill_mask(
    State(state): State<AppState>,
    Json(request): Json<FillMaskRequest>,
) -> Json<OutcomeResponse> {
    info!("Received fill-mask request");

    if let Err(e) = request.validate() {
        warn!("Fill-mask request rejected: {}", e);
        return Json(OutcomeResponse::warning(e.to_string()));
    }

    match state.fillmask.predict(&request).await {
        // A well-formed 200 with nothing in it: a warning, not an error.
        Ok(predictions) if predictions.is_empty() => Json(OutcomeResponse::warning(
            "No predictions returned from the API.",
        )),
        Ok(predictions) => Json(OutcomeResponse::predictions(predictions)),
        Err(e) => {
            error!("Fill-mask request failed: {}", e);
            Json(OutcomeResponse::error(e.to_string()))
        }
    }
}
