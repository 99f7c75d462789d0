// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request body helpers shared by the JSON endpoints
//!
//! Bodies are taken as raw `serde_json::Value` so that every malformed
//! input maps to a 400 with the uniform `{"error": ...}` body instead of
//! axum's plain-text extractor rejections.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde_json::Value;

use super::ApiError;

/// Extractor type used by the POST handlers
pub type JsonPayload = Result<Json<Value>, JsonRejection>;

/// Unwraps the extracted body. An oversized body keeps its 413, every
/// other extractor failure is a 400.
pub fn body_value(payload: JsonPayload) -> Result<Value, ApiError> {
    payload.map(|Json(value)| value).map_err(rejection_error)
}

fn rejection_error(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(rejection.body_text());
    }
    ApiError::InvalidRequest(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// Removes `name` from a JSON object body. `null` counts as absent, and so
/// does everything when the body is not an object.
pub fn take_field(body: &mut Value, name: &str) -> Option<Value> {
    body.as_object_mut()?
        .remove(name)
        .filter(|value| !value.is_null())
}

/// Accepts only JSON strings.
pub fn expect_string(value: Value, field: &str) -> Result<String, ApiError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(ApiError::InvalidRequest(format!(
            "\"{}\" must be a string",
            field
        ))),
    }
}
