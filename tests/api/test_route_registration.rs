// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - Every endpoint is mounted with its method
//! - Wrong methods are rejected
//! - Unknown paths get a JSON 404

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{hash_router, send};

#[cfg(test)]
mod route_registration_tests {
    use super::*;

    #[tokio::test]
    async fn test_post_routes_registered() {
        for uri in ["/embed", "/batch_embed", "/similarity"] {
            let (status, _) = send(hash_router(), Method::POST, uri, Some("{}")).await;
            // Empty object reaches the handler and fails validation
            assert_eq!(status, StatusCode::BAD_REQUEST, "route {}", uri);
        }
    }

    #[tokio::test]
    async fn test_wrong_methods_rejected() {
        let (status, _) = send(hash_router(), Method::GET, "/embed", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = send(hash_router(), Method::POST, "/health", Some("{}")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(hash_router(), Method::GET, "/v1/embed", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found: /v1/embed"}));
    }
}
