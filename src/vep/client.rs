// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Blocking HTTP client for the VEP HGVS endpoint.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::VepConfig;
use crate::error::{AnnotateError, FetchError};
use crate::vep::types::{ApiErrorBody, VepAnnotation};
use crate::vep::AnnotationSource;

/// HTTP client for the Ensembl VEP REST API.
///
/// One request is made per variant. Idle connections are not kept between
/// requests.
#[derive(Debug, Clone)]
pub struct VepClient {
    client: Client,
    base_url: String,
}

impl VepClient {
    /// Create a new VEP client.
    pub fn new(config: &VepConfig) -> Result<Self, AnnotateError> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(0);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| AnnotateError::Http {
            msg: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for the public Ensembl endpoint.
    pub fn with_defaults() -> Result<Self, AnnotateError> {
        Self::new(&VepConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a variant.
    ///
    /// The identifier is appended as-is. VEP expects raw HGVS in the path.
    pub fn request_url(&self, variant: &str) -> String {
        format!("{}/{}", self.base_url, variant)
    }

    /// Fetch the annotation for a single variant.
    pub fn fetch(&self, variant: &str) -> Result<VepAnnotation, FetchError> {
        let url = self.request_url(variant);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| FetchError::Network { msg: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are usually {"error": "..."} but proxies may send HTML
            let message = response
                .json::<ApiErrorBody>()
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().map_err(|e| FetchError::Network {
            msg: format!("Failed to read response body: {}", e),
        })?;

        decode_annotation(&body)
    }
}

impl AnnotationSource for VepClient {
    fn fetch(&self, variant: &str) -> Result<VepAnnotation, FetchError> {
        VepClient::fetch(self, variant)
    }
}

/// Decode a success body and take its first element.
pub fn decode_annotation(body: &str) -> Result<VepAnnotation, FetchError> {
    let annotations: Vec<VepAnnotation> =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse {
            msg: format!("Failed to parse response: {}", e),
        })?;

    annotations
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::InvalidResponse {
            msg: "empty annotation array".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationRecord;
    use std::time::Duration;

    #[test]
    fn test_request_url() {
        let client = VepClient::with_defaults().unwrap();
        assert_eq!(
            client.request_url("NC_000002.12:g.39006443C>T"),
            "http://rest.ensembl.org/vep/human/hgvs/NC_000002.12:g.39006443C>T"
        );
    }

    #[test]
    fn test_request_url_custom_base() {
        let config = VepConfig::new().base_url("http://localhost:8080/vep/human/hgvs/");
        let client = VepClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/vep/human/hgvs");
        assert_eq!(
            client.request_url("NM_000546.6:c.215C>G"),
            "http://localhost:8080/vep/human/hgvs/NM_000546.6:c.215C>G"
        );
    }

    #[test]
    fn test_decode_annotation_takes_first_element() {
        let body = r#"[
            {"assembly_name": "GRCh38", "seq_region_name": "17"},
            {"assembly_name": "GRCh37", "seq_region_name": "17"}
        ]"#;
        let annotation = decode_annotation(body).unwrap();
        assert_eq!(annotation.assembly_name.as_deref(), Some("GRCh38"));
    }

    #[test]
    fn test_decode_annotation_null_consequence_terms() {
        let body = r#"[{
            "assembly_name": "GRCh38", "seq_region_name": "17", "start": 7676154, "end": 7676154,
            "most_severe_consequence": "missense_variant", "strand": -1,
            "transcript_consequences": [{"gene_symbol": "TP53", "consequence_terms": null}]
        }]"#;
        let annotation = decode_annotation(body).unwrap();
        let record = AnnotationRecord::from_response("NM_000546.6:c.215C>G", &annotation).unwrap();
        assert_eq!(record.genes, "TP53");
    }

    #[test]
    fn test_decode_annotation_empty_array() {
        let result = decode_annotation("[]");
        assert!(matches!(result, Err(FetchError::InvalidResponse { .. })));
    }

    #[test]
    fn test_decode_annotation_not_an_array() {
        let result = decode_annotation(r#"{"error": "oops"}"#);
        assert!(matches!(result, Err(FetchError::InvalidResponse { .. })));
    }

    #[test]
    fn test_fetch_connection_refused() {
        // Nothing listens on port 1
        let config = VepConfig::new()
            .base_url("http://127.0.0.1:1/vep/human/hgvs")
            .timeout(Duration::from_secs(5))
            .no_proxy();
        let client = VepClient::new(&config).unwrap();

        let result = client.fetch("NC_000002.12:g.39006443C>T");
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }
}
