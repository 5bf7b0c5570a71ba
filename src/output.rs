// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Tab-separated annotation report.
//!
//! Field values are written verbatim; they are expected to contain no tabs or
//! newlines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::annotation::AnnotationRecord;
use crate::error::AnnotateError;

/// Report columns, in output order.
pub const COLUMNS: [&str; 8] = [
    "variant",
    "assembly_name",
    "seq_region_name",
    "start",
    "end",
    "most_severe_consequence",
    "strand",
    "genes",
];

/// Header line of the report (no trailing newline).
pub fn header() -> String {
    COLUMNS.join("\t")
}

/// Write the header and one line per record to `writer`.
pub fn write_annotations_to<W: Write>(
    mut writer: W,
    records: &[AnnotationRecord],
) -> Result<(), AnnotateError> {
    writeln!(writer, "{}", header())?;
    for record in records {
        writeln!(writer, "{}", record.to_tsv_line())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing content.
pub fn write_annotations(
    path: impl AsRef<Path>,
    records: &[AnnotationRecord],
) -> Result<(), AnnotateError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| AnnotateError::Io {
        msg: format!("Failed to create {}: {}", path.display(), e),
    })?;
    write_annotations_to(BufWriter::new(file), records)
}
