// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Annotation records built from VEP responses.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::AnnotateError;
use crate::vep::types::{TranscriptConsequence, VepAnnotation};

/// Separator between gene symbols in the `genes` column
pub const GENE_SEPARATOR: &str = ", ";

/// One row of the annotation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    /// Variant identifier as read from the input file
    pub variant: String,
    pub assembly_name: String,
    pub seq_region_name: String,
    pub start: u64,
    pub end: u64,
    pub most_severe_consequence: String,
    pub strand: i8,
    /// Distinct gene symbols joined by [`GENE_SEPARATOR`]
    pub genes: String,
}

impl AnnotationRecord {
    /// Build a record from a VEP annotation.
    ///
    /// Fails with [`AnnotateError::MissingField`] naming the first absent field.
    pub fn from_response(
        variant: impl Into<String>,
        response: &VepAnnotation,
    ) -> Result<Self, AnnotateError> {
        let assembly_name = required(response.assembly_name.clone(), "assembly_name")?;
        let seq_region_name = required(response.seq_region_name.clone(), "seq_region_name")?;
        let start = required(response.start, "start")?;
        let end = required(response.end, "end")?;
        let most_severe_consequence = required(
            response.most_severe_consequence.clone(),
            "most_severe_consequence",
        )?;
        let strand = required(response.strand, "strand")?;
        let consequences = required(
            response.transcript_consequences.as_deref(),
            "transcript_consequences",
        )?;

        Ok(Self {
            variant: variant.into(),
            assembly_name,
            seq_region_name,
            start,
            end,
            most_severe_consequence,
            strand,
            genes: unique_genes(consequences)?,
        })
    }

    /// Render the record as a tab-separated line (no trailing newline).
    pub fn to_tsv_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.variant,
            self.assembly_name,
            self.seq_region_name,
            self.start,
            self.end,
            self.most_severe_consequence,
            self.strand,
            self.genes
        )
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AnnotateError> {
    value.ok_or_else(|| AnnotateError::missing_field(field))
}

/// Collect the distinct gene symbols of a set of transcript consequences.
///
/// Symbols are sorted and joined with `", "`. Every consequence must carry a
/// gene symbol.
///
/// # Examples
///
/// ```
/// use annotate_variants::annotation::unique_genes;
/// use annotate_variants::vep::TranscriptConsequence;
///
/// let consequences = vec![
///     TranscriptConsequence::with_gene("SYNE1"),
///     TranscriptConsequence::with_gene("SYNE1"),
/// ];
/// assert_eq!(unique_genes(&consequences).unwrap(), "SYNE1");
/// assert_eq!(unique_genes(&[]).unwrap(), "");
/// ```
pub fn unique_genes(consequences: &[TranscriptConsequence]) -> Result<String, AnnotateError> {
    let mut genes = BTreeSet::new();
    for consequence in consequences {
        let symbol = consequence
            .gene_symbol
            .as_deref()
            .ok_or_else(|| AnnotateError::missing_field("transcript_consequences.gene_symbol"))?;
        genes.insert(symbol);
    }

    Ok(genes.into_iter().collect::<Vec<_>>().join(GENE_SEPARATOR))
}
