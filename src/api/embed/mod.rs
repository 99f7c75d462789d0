// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API Module
//!
//! POST /embed (one text) and POST /batch_embed (list of texts).

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{batch_embed_handler, embed_handler};
pub use request::{BatchEmbedRequest, EmbedRequest};
pub use response::{BatchEmbedResponse, EmbedResponse};
