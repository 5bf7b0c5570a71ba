// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Annotation pipeline.
//!
//! Variants are processed one at a time in input order: fetch, build a
//! record, and either keep the record or remember why the variant failed.
//! A failure never stops the remaining variants.
//!
//! # Example
//!
//! ```
//! use annotate_variants::pipeline::Annotator;
//! use annotate_variants::reporter::MemoryReporter;
//! use annotate_variants::variants::VariantSet;
//! use annotate_variants::vep::MockAnnotationSource;
//!
//! let source = MockAnnotationSource::with_test_data();
//! let reporter = MemoryReporter::new();
//! let annotator = Annotator::new(&source, &reporter);
//!
//! let variants: VariantSet = ["NM_000546.6:c.215C>G", "NM_000546.6:c.1del"]
//!     .into_iter()
//!     .collect();
//! let outcome = annotator.annotate(&variants);
//!
//! assert_eq!(outcome.success_count(), 1);
//! assert_eq!(outcome.failed_variants(), vec!["NM_000546.6:c.1del"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::annotation::AnnotationRecord;
use crate::error::{AnnotateError, FailureKind, FetchError};
use crate::output::write_annotations;
use crate::reporter::Reporter;
use crate::variants::{read_variants, VariantSet};
use crate::vep::AnnotationSource;

/// Why a variant produced no annotation record
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// The annotation could not be fetched
    Fetch(FetchError),
    /// The annotation was fetched but could not be turned into a record
    Incomplete(AnnotateError),
}

impl FailureReason {
    pub fn kind(&self) -> FailureKind {
        match self {
            FailureReason::Fetch(e) => e.kind(),
            FailureReason::Incomplete(_) => FailureKind::MissingField,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Fetch(e) => write!(f, "{}", e),
            FailureReason::Incomplete(e) => write!(f, "{}", e),
        }
    }
}

/// A variant that could not be annotated
#[derive(Debug, Clone, PartialEq)]
pub struct FailedVariant {
    pub variant: String,
    pub reason: FailureReason,
}

/// Records and failures of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationOutcome {
    /// Annotated variants, in processing order
    pub records: Vec<AnnotationRecord>,
    /// Failed variants, in processing order
    pub failed: Vec<FailedVariant>,
}

impl AnnotationOutcome {
    pub fn success_count(&self) -> usize {
        self.records.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn total(&self) -> usize {
        self.success_count() + self.failure_count()
    }

    /// Identifiers of the failed variants
    pub fn failed_variants(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.variant.as_str()).collect()
    }

    /// Number of failures per category
    pub fn failure_counts(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for failure in &self.failed {
            *counts.entry(failure.reason.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Report the totals and every failed variant.
    pub fn log_summary<R: Reporter>(&self, reporter: &R) {
        reporter.warn(&format!(
            "{} annotations were retrieved",
            self.success_count()
        ));
        reporter.warn(&format!(
            "{} variants could not be annotated",
            self.failure_count()
        ));
        for (kind, count) in self.failure_counts() {
            reporter.info(&format!("[{}] {}: {}", kind, kind.description(), count));
        }
        reporter.warn(&format!(
            "The following variants could not be annotated: {}",
            self.failed_variants().join("\n")
        ));
    }
}

/// Drives annotation of a variant list against an [`AnnotationSource`].
#[derive(Debug)]
pub struct Annotator<S, R> {
    source: S,
    reporter: R,
}

impl<S: AnnotationSource, R: Reporter> Annotator<S, R> {
    pub fn new(source: S, reporter: R) -> Self {
        Self { source, reporter }
    }

    /// Annotate a single variant.
    pub fn annotate_one(&self, variant: &str) -> Result<AnnotationRecord, FailureReason> {
        let annotation = self
            .source
            .fetch(variant)
            .map_err(FailureReason::Fetch)?;
        AnnotationRecord::from_response(variant, &annotation).map_err(FailureReason::Incomplete)
    }

    /// Annotate every variant of the set, in set order.
    pub fn annotate(&self, variants: &VariantSet) -> AnnotationOutcome {
        let mut outcome = AnnotationOutcome::default();

        for variant in variants.iter() {
            self.reporter.info(&format!("Annotating variant {}", variant));

            match self.annotate_one(variant) {
                Ok(record) => outcome.records.push(record),
                Err(reason) => {
                    match &reason {
                        FailureReason::Fetch(e @ FetchError::Network { .. }) => {
                            self.reporter.error(&format!(
                                "Error retrieving the annotation for the variant {}: {}",
                                variant, e
                            ))
                        }
                        FailureReason::Fetch(e) => self.reporter.error(&format!(
                            "{} could not be annotated with error: {}",
                            variant, e
                        )),
                        FailureReason::Incomplete(e) => self.reporter.error(&format!(
                            "Error retrieving the annotation for the variant {}: {}",
                            variant, e
                        )),
                    }
                    outcome.failed.push(FailedVariant {
                        variant: variant.to_string(),
                        reason,
                    });
                }
            }
        }

        outcome
    }

    /// Read `input`, annotate every variant, write the report to `output` and
    /// log the summary.
    ///
    /// Only file I/O errors are returned; per-variant failures end up in the
    /// outcome.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<AnnotationOutcome, AnnotateError> {
        let variants = read_variants(input)?;
        self.reporter
            .info(&format!("{} variants to be annotated", variants.len()));

        let outcome = self.annotate(&variants);
        write_annotations(output, &outcome.records)?;
        outcome.log_summary(&self.reporter);

        Ok(outcome)
    }
}
