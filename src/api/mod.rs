// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embed;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod payload;
pub mod similarity;

pub use embed::{
    batch_embed_handler, embed_handler, BatchEmbedRequest, BatchEmbedResponse, EmbedRequest,
    EmbedResponse,
};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{health_handler, not_found_handler, HealthResponse};
pub use http_server::{create_router, start_server, AppState};
pub use similarity::{similarity_handler, SimilarityRequest, SimilarityResponse};
