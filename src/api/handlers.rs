// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, http::Uri, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use super::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.encoder.model_name().to_string(),
    })
}

/// Router fallback, keeps unknown paths on the `{"error": ...}` shape
pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Not found: {}", uri.path()))
}
