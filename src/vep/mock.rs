// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! In-memory annotation source for testing

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FetchError;
use crate::vep::types::{TranscriptConsequence, VepAnnotation};
use crate::vep::AnnotationSource;

/// Annotation source that answers from canned responses.
///
/// Variants without a canned response fail the way VEP rejects unparseable
/// HGVS: an API error with status 400. Every requested variant is recorded.
#[derive(Debug, Default)]
pub struct MockAnnotationSource {
    responses: HashMap<String, Result<VepAnnotation, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl MockAnnotationSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `variant` with an annotation
    pub fn add_annotation(&mut self, variant: impl Into<String>, annotation: VepAnnotation) {
        self.responses.insert(variant.into(), Ok(annotation));
    }

    /// Answer `variant` with a failure
    pub fn add_failure(&mut self, variant: impl Into<String>, error: FetchError) {
        self.responses.insert(variant.into(), Err(error));
    }

    /// Variants requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Create a source with a few well-known variants
    pub fn with_test_data() -> Self {
        let mut source = Self::new();

        source.add_annotation(
            "NC_000002.12:g.39006443C>T",
            VepAnnotation {
                assembly_name: Some("GRCh38".to_string()),
                seq_region_name: Some("2".to_string()),
                start: Some(39006443),
                end: Some(39006443),
                most_severe_consequence: Some("missense_variant".to_string()),
                strand: Some(1),
                transcript_consequences: Some(vec![
                    TranscriptConsequence::with_gene("SOS1"),
                    TranscriptConsequence::with_gene("SOS1"),
                ]),
            },
        );

        source.add_annotation(
            "NM_000546.6:c.215C>G",
            VepAnnotation {
                assembly_name: Some("GRCh38".to_string()),
                seq_region_name: Some("17".to_string()),
                start: Some(7676154),
                end: Some(7676154),
                most_severe_consequence: Some("missense_variant".to_string()),
                strand: Some(-1),
                transcript_consequences: Some(vec![
                    TranscriptConsequence::with_gene("TP53"),
                    TranscriptConsequence::with_gene("WRAP53"),
                    TranscriptConsequence::with_gene("TP53"),
                ]),
            },
        );

        source
    }
}

impl AnnotationSource for MockAnnotationSource {
    fn fetch(&self, variant: &str) -> Result<VepAnnotation, FetchError> {
        self.requests.borrow_mut().push(variant.to_string());

        match self.responses.get(variant) {
            Some(response) => response.clone(),
            None => Err(FetchError::Api {
                status: 400,
                message: format!("Unable to parse HGVS notation '{}'", variant),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variant() {
        let source = MockAnnotationSource::with_test_data();
        let annotation = source.fetch("NM_000546.6:c.215C>G").unwrap();
        assert_eq!(annotation.seq_region_name.as_deref(), Some("17"));
        assert_eq!(annotation.strand, Some(-1));
    }

    #[test]
    fn test_unknown_variant_is_api_error() {
        let source = MockAnnotationSource::new();
        let result = source.fetch("NM_999999.1:c.1A>G");
        assert!(matches!(result, Err(FetchError::Api { status: 400, .. })));
    }

    #[test]
    fn test_canned_failure() {
        let mut source = MockAnnotationSource::new();
        source.add_failure(
            "NM_000546.6:c.215C>G",
            FetchError::Network {
                msg: "timed out".to_string(),
            },
        );
        let result = source.fetch("NM_000546.6:c.215C>G");
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }

    #[test]
    fn test_requests_are_recorded() {
        let source = MockAnnotationSource::with_test_data();
        let _ = source.fetch("b:2");
        let _ = source.fetch("a:1");
        assert_eq!(source.requests(), vec!["b:2", "a:1"]);
    }
}
