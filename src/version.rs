// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Fabstir Embed Server

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-minilm-embeddings-2026-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-16";

/// Endpoints served by this version
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health check"),
    ("POST", "/embed", "Generate single embedding"),
    ("POST", "/batch_embed", "Generate multiple embeddings"),
    ("POST", "/similarity", "Calculate similarity between texts"),
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Embed Server {} ({})", VERSION_NUMBER, BUILD_DATE)
}
