// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Variant list reading.
//!
//! Input files hold one variant identifier per line. A line is kept only if it
//! has exactly one `:` separating the sequence reference from the change
//! description; everything else is dropped without an error. Repeated lines
//! are kept once.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AnnotateError;

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Check that a variant identifier has the `<reference>:<change>` shape.
///
/// # Examples
///
/// ```
/// use annotate_variants::variants::validate_variant;
///
/// assert!(validate_variant("NC_000002.12:g.39006443C>T"));
/// assert!(!validate_variant("NC_000002.12g.39006443C>T"));
/// assert!(!validate_variant("NM_000088.3:c.10A>G:extra"));
/// ```
pub fn validate_variant(variant: &str) -> bool {
    variant.matches(':').count() == 1
}

/// Unique variant identifiers in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl VariantSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant. Returns `false` if it was already present.
    pub fn insert(&mut self, variant: impl Into<String>) -> bool {
        let variant = variant.into();
        if self.seen.contains(&variant) {
            return false;
        }
        self.seen.insert(variant.clone());
        self.order.push(variant);
        true
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.seen.contains(variant)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VariantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = VariantSet::new();
        for variant in iter {
            set.insert(variant);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Read valid, unique variants from any buffered reader.
pub fn parse_variants<R: BufRead>(reader: R) -> Result<VariantSet, AnnotateError> {
    let mut variants = VariantSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if idx == 0 {
            line.strip_prefix(UTF8_BOM).unwrap_or(&line)
        } else {
            &line
        };
        let variant = line.trim_end();

        if !validate_variant(variant) {
            tracing::debug!("Skipping malformed line {}: {:?}", idx + 1, variant);
            continue;
        }
        variants.insert(variant);
    }

    Ok(variants)
}

/// Read valid, unique variants from a file.
pub fn read_variants(path: impl AsRef<Path>) -> Result<VariantSet, AnnotateError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AnnotateError::Io {
        msg: format!("Failed to open {}: {}", path.display(), e),
    })?;
    parse_variants(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_variant() {
        assert!(validate_variant("NC_000002.12:g.39006443C>T"));
        assert!(validate_variant(":"));
    }

    #[test]
    fn test_validate_variant_invalid() {
        assert!(!validate_variant("NC_000002.12g.39006443C>T"));
        assert!(!validate_variant(""));
        assert!(!validate_variant("a:b:c"));
    }

    #[test]
    fn test_variant_set_insert_is_idempotent() {
        let mut set = VariantSet::new();
        assert!(set.insert("NC_000002.12:g.39006443C>T"));
        assert!(!set.insert("NC_000002.12:g.39006443C>T"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("NC_000002.12:g.39006443C>T"));
    }

    #[test]
    fn test_variant_set_keeps_first_seen_order() {
        let set: VariantSet = ["b:2", "a:1", "b:2", "c:3"].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec!["b:2", "a:1", "c:3"]);
    }

    #[test]
    fn test_parse_variants_drops_malformed_lines() {
        let input = "NC_000002.12:g.39006443C>T\n\
                     NC_000002.12g.39006443C>T\n\
                     \n\
                     # comment\n\
                     NM_000088.3:c.10A>G:c.11A>G\n\
                     NM_000546.6:c.215C>G\n";
        let variants = parse_variants(Cursor::new(input)).unwrap();

        assert_eq!(variants.len(), 2);
        for variant in &variants {
            assert_eq!(variant.matches(':').count(), 1);
        }
    }

    #[test]
    fn test_parse_variants_trims_trailing_whitespace() {
        let input = "NM_000546.6:c.215C>G  \t\r\nNM_000546.6:c.215C>G\n";
        let variants = parse_variants(Cursor::new(input)).unwrap();
        let all: Vec<_> = variants.iter().collect();
        assert_eq!(all, vec!["NM_000546.6:c.215C>G"]);
    }

    #[test]
    fn test_parse_variants_strips_bom() {
        let input = "\u{feff}NM_000546.6:c.215C>G\nNM_000546.6:c.215C>G\n";
        let variants = parse_variants(Cursor::new(input)).unwrap();
        assert_eq!(variants.len(), 1);
        assert!(variants.contains("NM_000546.6:c.215C>G"));
    }

    #[test]
    fn test_read_variants() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "NC_000002.12:g.39006443C>T").unwrap();
        writeln!(file, "NC_000002.12:g.39006443C>T").unwrap();
        file.flush().unwrap();

        let variants = read_variants(file.path()).unwrap();
        let expected: VariantSet = ["NC_000002.12:g.39006443C>T"].into_iter().collect();
        assert_eq!(variants, expected);
    }

    #[test]
    fn test_read_variants_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_variants(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AnnotateError::Io { .. })));
    }
}
