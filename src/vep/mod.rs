// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Ensembl VEP annotation access.
//!
//! [`AnnotationSource`] is what the pipeline depends on. [`VepClient`] talks to
//! the REST service; [`MockAnnotationSource`] answers from memory.
//!
//! # Example
//!
//! ```
//! use annotate_variants::vep::{AnnotationSource, MockAnnotationSource};
//!
//! let source = MockAnnotationSource::with_test_data();
//! let annotation = source.fetch("NC_000002.12:g.39006443C>T").unwrap();
//! assert_eq!(annotation.assembly_name.as_deref(), Some("GRCh38"));
//!
//! assert!(source.fetch("NC_000002.12:g.1del").is_err());
//! ```

pub mod client;
pub mod mock;
pub mod types;

pub use client::VepClient;
pub use mock::MockAnnotationSource;
pub use types::{ApiErrorBody, TranscriptConsequence, VepAnnotation};

use crate::error::FetchError;

/// Something that can annotate one variant identifier
pub trait AnnotationSource {
    /// Fetch the annotation for `variant`.
    ///
    /// Failures are returned, never raised: the error says whether the
    /// request failed, the service rejected the variant, or the body was
    /// unusable.
    fn fetch(&self, variant: &str) -> Result<VepAnnotation, FetchError>;
}

impl<T: AnnotationSource + ?Sized> AnnotationSource for &T {
    fn fetch(&self, variant: &str) -> Result<VepAnnotation, FetchError> {
        (**self).fetch(variant)
    }
}
