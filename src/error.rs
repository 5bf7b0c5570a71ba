// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Error types for annotate-variants
//!
//! Two layers of errors exist:
//! - [`FetchError`] describes why a single request to the annotation service
//!   produced no annotation
//! - [`AnnotateError`] is the crate-wide error, covering file I/O, client
//!   construction and incomplete responses
//!
//! [`FailureKind`] groups both into the categories reported in the run summary.

use std::fmt;
use thiserror::Error;

/// Failure categories for variants that could not be annotated
///
/// These codes are stable and can be used to group failures in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum FailureKind {
    /// Connection, DNS or timeout failure
    Network = 1001,
    /// The service answered with a non-success status
    Api = 1002,
    /// The service answered successfully but the body could not be decoded
    InvalidResponse = 1003,
    /// A required field was absent from the annotation
    MissingField = 2001,
}

impl FailureKind {
    /// Get the failure code as a string (e.g., "F1001")
    pub fn as_str(&self) -> String {
        format!("F{:04}", *self as u16)
    }

    /// Get a brief description of this failure kind
    pub fn description(&self) -> &'static str {
        match self {
            FailureKind::Network => "network error",
            FailureKind::Api => "error reported by the annotation service",
            FailureKind::InvalidResponse => "undecodable annotation response",
            FailureKind::MissingField => "incomplete annotation response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reason a request to the annotation service produced no annotation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never got a response
    #[error("HTTP request failed: {msg}")]
    Network { msg: String },

    /// The service answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The service answered successfully but the body was not a usable annotation
    #[error("Invalid annotation response: {msg}")]
    InvalidResponse { msg: String },
}

impl FetchError {
    /// Get the failure category of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network { .. } => FailureKind::Network,
            FetchError::Api { .. } => FailureKind::Api,
            FetchError::InvalidResponse { .. } => FailureKind::InvalidResponse,
        }
    }
}

/// Main error type for annotate-variants operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotateError {
    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// The HTTP client could not be built
    #[error("HTTP client error: {msg}")]
    Http { msg: String },

    /// An expected field was absent from an annotation response
    #[error("Missing field in annotation response: {field}")]
    MissingField { field: String },

    /// Fetching an annotation failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AnnotateError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        AnnotateError::MissingField {
            field: field.into(),
        }
    }

    /// Get the failure category if this error describes a per-variant failure
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            AnnotateError::MissingField { .. } => Some(FailureKind::MissingField),
            AnnotateError::Fetch(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnnotateError {
    fn from(err: std::io::Error) -> Self {
        AnnotateError::Io {
            msg: err.to_string(),
        }
    }
}
