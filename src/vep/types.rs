// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! VEP response types.
//!
//! Only the fields this crate reports are decoded; everything else in the
//! response is ignored. Every field is optional so a missing field surfaces
//! when an [`AnnotationRecord`](crate::annotation::AnnotationRecord) is built
//! rather than as a decoding failure.

use serde::Deserialize;

/// One element of the array returned by `GET /vep/human/hgvs/<variant>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VepAnnotation {
    /// Genome assembly (e.g., "GRCh38")
    pub assembly_name: Option<String>,
    /// Chromosome or contig name (e.g., "2")
    pub seq_region_name: Option<String>,
    /// 1-based start coordinate
    pub start: Option<u64>,
    /// 1-based end coordinate
    pub end: Option<u64>,
    /// Most severe Sequence Ontology consequence term
    pub most_severe_consequence: Option<String>,
    /// Strand (1 or -1)
    pub strand: Option<i8>,
    /// Per-transcript consequences
    pub transcript_consequences: Option<Vec<TranscriptConsequence>>,
}

/// Predicted effect of a variant on one transcript.
///
/// Only the gene symbol is read; transcript ids, terms and impact are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TranscriptConsequence {
    pub gene_symbol: Option<String>,
}

impl TranscriptConsequence {
    /// Create a consequence carrying only a gene symbol.
    pub fn with_gene(gene_symbol: impl Into<String>) -> Self {
        Self {
            gene_symbol: Some(gene_symbol.into()),
            ..Default::default()
        }
    }
}

/// Body returned with non-success status codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}
