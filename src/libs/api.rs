use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{debug, error};
use serde_json::json;
use thiserror::Error;

use crate::structs::category::Category;
use crate::structs::suggestion::{RankResponse, SuggestResponse, SuggestionRequest};

use super::category::CategoryMatcher;
use super::middleware::{request_logger, HEALTH_PATH};
use super::store::{CategoryStore, StoreError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);

        let status = match self {
            ApiError::StoreError(_) => StatusCode::BAD_GATEWAY,
            ApiError::JoinError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CategoryStore>,
    pub matcher: Arc<CategoryMatcher>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route("/suggest", post(suggest))
        .route("/rank", post(rank))
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn suggest(
    State(state): State<AppState>,
    Json(mut request): Json<SuggestionRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let categories = request_categories(&state, &mut request).await?;
    let suggestion = state.matcher.suggest(&request.link(), &categories);

    debug!("Suggested {:?} for {}", suggestion, request.url);

    Ok(Json(SuggestResponse {
        category_id: suggestion.map(str::to_string),
        resolved_category_id: state.matcher.resolve(suggestion).to_string(),
    }))
}

pub async fn rank(
    State(state): State<AppState>,
    Json(mut request): Json<SuggestionRequest>,
) -> Result<Json<RankResponse>, ApiError> {
    let categories = request_categories(&state, &mut request).await?;
    let category_ids = state
        .matcher
        .rank(&request.link(), &categories)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(RankResponse { category_ids }))
}

// Explicit categories win over the store; neither means the matcher's defaults.
async fn request_categories(
    state: &AppState,
    request: &mut SuggestionRequest,
) -> Result<Vec<Category>, ApiError> {
    if let Some(categories) = request.categories.take() {
        return Ok(categories);
    }

    let Some(user_id) = request.user_id.clone() else {
        return Ok(vec![]);
    };

    // Store implementations may block (redis, files)
    let store = Arc::clone(&state.store);
    let categories = tokio::task::spawn_blocking(move || store.fetch_categories(&user_id)).await??;

    Ok(categories)
}
