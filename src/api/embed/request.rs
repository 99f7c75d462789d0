// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request types for POST /embed and POST /batch_embed
//!
//! Both are built from the raw JSON body so each validation failure gets
//! its own message.

use serde_json::Value;

use crate::api::payload::{expect_string, take_field};
use crate::api::ApiError;

pub const TEXT_REQUIRED: &str = "Invalid input, \"text\" field is required";
pub const TEXTS_REQUIRED: &str = "Invalid input, \"texts\" field is required";
pub const TEXTS_NOT_A_LIST: &str = "\"texts\" must be a list";

/// Request body for POST /embed
///
/// # Example
/// ```json
/// { "text": "Hello world" }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedRequest {
    pub text: String,
}

impl TryFrom<Value> for EmbedRequest {
    type Error = ApiError;

    fn try_from(mut body: Value) -> Result<Self, Self::Error> {
        let text = take_field(&mut body, "text")
            .ok_or_else(|| ApiError::InvalidRequest(TEXT_REQUIRED.to_string()))?;

        Ok(Self {
            text: expect_string(text, "text")?,
        })
    }
}

/// Request body for POST /batch_embed
///
/// # Example
/// ```json
/// { "texts": ["Hello world", "Another text"] }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEmbedRequest {
    pub texts: Vec<String>,
}

impl TryFrom<Value> for BatchEmbedRequest {
    type Error = ApiError;

    fn try_from(mut body: Value) -> Result<Self, Self::Error> {
        let texts = match take_field(&mut body, "texts") {
            None => return Err(ApiError::InvalidRequest(TEXTS_REQUIRED.to_string())),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ApiError::InvalidRequest(TEXTS_NOT_A_LIST.to_string())),
        };

        let texts = texts
            .into_iter()
            .enumerate()
            .map(|(index, item)| expect_string(item, &format!("texts[{}]", index)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { texts })
    }
}
