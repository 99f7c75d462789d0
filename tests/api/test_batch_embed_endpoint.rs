// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /batch_embed tests

use axum::http::StatusCode;
use fabstir_embed_server::api::embed::request::{TEXTS_NOT_A_LIST, TEXTS_REQUIRED};
use serde_json::json;

use crate::common::{
    as_vector, failing_router, hash_router, limited_router, post_json, TEST_DIMENSION,
};

/// About 67 bytes per item once serialized
fn large_batch(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Sentence number {:06} in a large batch of embedding inputs.....", i))
        .collect()
}

#[cfg(test)]
mod batch_embed_endpoint_tests {
    use super::*;

    /// Output length equals input length and order follows the input
    #[tokio::test]
    async fn test_batch_preserves_length_and_order() {
        let texts = ["First text", "Second text", "Third text", "First text"];

        let (status, body) =
            post_json(hash_router(), "/batch_embed", json!({ "texts": texts })).await;
        assert_eq!(status, StatusCode::OK);

        let embeddings = body["embeddings"].as_array().unwrap();
        assert_eq!(embeddings.len(), texts.len());

        for (text, embedding) in texts.iter().zip(embeddings) {
            let (_, single) = post_json(hash_router(), "/embed", json!({ "text": text })).await;
            let vector = as_vector(embedding);
            assert_eq!(vector.len(), TEST_DIMENSION);
            assert_eq!(vector, as_vector(&single["embedding"]));
        }

        // Duplicate inputs produce identical rows
        assert_eq!(embeddings[0], embeddings[3]);
        assert_ne!(embeddings[0], embeddings[1]);
    }

    #[tokio::test]
    async fn test_batch_empty_list() {
        let (status, body) = post_json(hash_router(), "/batch_embed", json!({"texts": []})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"embeddings": []}));
    }

    #[tokio::test]
    async fn test_batch_texts_not_a_list() {
        for texts in [json!("just one"), json!(7), json!({"a": "b"})] {
            let (status, body) =
                post_json(hash_router(), "/batch_embed", json!({ "texts": texts })).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], TEXTS_NOT_A_LIST);
        }
    }

    #[tokio::test]
    async fn test_batch_texts_missing() {
        let (status, body) = post_json(hash_router(), "/batch_embed", json!({"text": "x"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], TEXTS_REQUIRED);
    }

    #[tokio::test]
    async fn test_batch_non_string_item() {
        let (status, body) =
            post_json(hash_router(), "/batch_embed", json!({"texts": ["a", null]})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "\"texts[1]\" must be a string");
    }

    /// Bodies above axum's 2 MB default are accepted when no cap is configured
    #[tokio::test]
    async fn test_batch_body_over_two_megabytes() {
        let texts = large_batch(40_000);
        let body = json!({ "texts": texts });
        assert!(body.to_string().len() > 2 * 1024 * 1024);

        let (status, response) = post_json(hash_router(), "/batch_embed", body).await;

        assert_eq!(status, StatusCode::OK);
        let embeddings = response["embeddings"].as_array().unwrap();
        assert_eq!(embeddings.len(), 40_000);
        assert_eq!(as_vector(&embeddings[39_999]).len(), TEST_DIMENSION);
    }

    /// A configured cap answers 413, not a JSON parse error
    #[tokio::test]
    async fn test_batch_body_over_configured_limit() {
        let body = json!({ "texts": large_batch(100) });

        let (status, response) = post_json(limited_router(1024), "/batch_embed", body).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        let message = response["error"].as_str().unwrap();
        assert!(!message.starts_with("Invalid JSON body"), "{}", message);

        let (status, _) =
            post_json(limited_router(1024), "/batch_embed", json!({"texts": ["small"]})).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_batch_model_failure() {
        let (status, body) =
            post_json(failing_router(), "/batch_embed", json!({"texts": ["a", "b"]})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Failed to generate embeddings: ONNX session exploded"
        );
    }
}
