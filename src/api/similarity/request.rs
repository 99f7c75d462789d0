// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde_json::Value;

use crate::api::payload::{expect_string, take_field};
use crate::api::ApiError;

pub const TEXTS_REQUIRED: &str = "Invalid input, \"text1\" and \"text2\" fields are required";

/// Request body for POST /similarity
///
/// # Example
/// ```json
/// { "text1": "A cat sits on the mat", "text2": "A feline rests on a rug" }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRequest {
    pub text1: String,
    pub text2: String,
}

impl TryFrom<Value> for SimilarityRequest {
    type Error = ApiError;

    fn try_from(mut body: Value) -> Result<Self, Self::Error> {
        let (text1, text2) = match (take_field(&mut body, "text1"), take_field(&mut body, "text2")) {
            (Some(text1), Some(text2)) => (text1, text2),
            _ => return Err(ApiError::InvalidRequest(TEXTS_REQUIRED.to_string())),
        };

        Ok(Self {
            text1: expect_string(text1, "text1")?,
            text2: expect_string(text2, "text2")?,
        })
    }
}
