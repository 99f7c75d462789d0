// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /similarity tests

use axum::http::StatusCode;
use fabstir_embed_server::api::similarity::request::TEXTS_REQUIRED;
use fabstir_embed_server::cosine_similarity;
use serde_json::json;

use crate::common::{failing_router, hash_router, post_json, HashEncoder, TEST_DIMENSION};

#[cfg(test)]
mod similarity_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_identical_texts_score_one() {
        let (status, body) = post_json(
            hash_router(),
            "/similarity",
            json!({"text1": "The cat sat on the mat", "text2": "The cat sat on the mat"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let score = body["similarity"].as_f64().unwrap();
        assert!((score - 1.0).abs() < 1e-5, "score was {}", score);
    }

    #[tokio::test]
    async fn test_different_texts_match_cosine() {
        let (status, body) = post_json(
            hash_router(),
            "/similarity",
            json!({"text1": "apples", "text2": "oranges"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let encoder = HashEncoder::new(TEST_DIMENSION);
        let expected =
            cosine_similarity(&encoder.vector("apples"), &encoder.vector("oranges")).unwrap();

        let score = body["similarity"].as_f64().unwrap() as f32;
        assert!((-1.0..=1.0).contains(&score));
        assert!((score - expected).abs() < 1e-6);
        assert!(score < 0.999);
    }

    #[tokio::test]
    async fn test_missing_either_field() {
        for body in [json!({"text1": "a"}), json!({"text2": "b"}), json!({})] {
            let (status, response) = post_json(hash_router(), "/similarity", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], TEXTS_REQUIRED);
        }
    }

    #[tokio::test]
    async fn test_non_string_field() {
        let (status, body) = post_json(
            hash_router(),
            "/similarity",
            json!({"text1": 1, "text2": "b"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "\"text1\" must be a string");
    }

    #[tokio::test]
    async fn test_model_failure() {
        let (status, body) = post_json(
            failing_router(),
            "/similarity",
            json!({"text1": "a", "text2": "b"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Failed to calculate similarity: ONNX session exploded"
        );
    }
}
