// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! annotate-variants: HGVS variant annotation with Ensembl VEP
//!
//! Reads HGVS variants from a file, fetches one VEP annotation per variant and
//! writes a tab-separated report.
//!
//! # Example
//!
//! ```
//! use annotate_variants::{Annotator, MemoryReporter, MockAnnotationSource};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = dir.path().join("variants.txt");
//! let output = dir.path().join("annotations.tsv");
//! std::fs::write(&input, "NC_000002.12:g.39006443C>T\nNC_000002.12:g.39006443C>T\n").unwrap();
//!
//! let source = MockAnnotationSource::with_test_data();
//! let reporter = MemoryReporter::new();
//! let outcome = Annotator::new(&source, &reporter).run(&input, &output).unwrap();
//!
//! assert_eq!(outcome.success_count(), 1);
//! assert_eq!(std::fs::read_to_string(&output).unwrap().lines().count(), 2);
//! ```

pub mod annotation;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reporter;
pub mod variants;
pub mod vep;

// Re-export commonly used types
pub use annotation::{unique_genes, AnnotationRecord};
pub use config::VepConfig;
pub use error::{AnnotateError, FailureKind, FetchError};
pub use output::write_annotations;
pub use pipeline::{AnnotationOutcome, Annotator, FailedVariant, FailureReason};
pub use reporter::{MemoryReporter, Reporter, TracingReporter};
pub use variants::{read_variants, validate_variant, VariantSet};
pub use vep::{AnnotationSource, MockAnnotationSource, VepAnnotation, VepClient};

/// Result type alias for annotate-variants operations
pub type Result<T> = std::result::Result<T, AnnotateError>;
