// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! Command-line arguments.
//!
//! The tool takes exactly two positional arguments and nothing else. Any
//! other invocation prints [`USAGE`] and exits with status 1.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Usage line printed on invalid invocation
pub const USAGE: &str = "Usage: annotate-variants <variants_file> <output_file>";

/// Exit status for invalid invocation
pub const USAGE_EXIT_CODE: i32 = 1;

/// Level of the log filter installed by the binary
pub const LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "annotate-variants")]
#[command(about = "Annotate HGVS variants with Ensembl VEP and write a TSV report")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Input file with one HGVS variant per line
    pub variants_file: PathBuf,

    /// Tab-separated report to write
    pub output_file: PathBuf,
}

/// Parse a full argument list (program name first).
///
/// Returns `None` unless exactly two arguments follow the program name.
/// Arguments are never interpreted as flags.
///
/// # Examples
///
/// ```
/// use annotate_variants::cli::parse_args;
///
/// assert!(parse_args(["annotate-variants", "variants.txt", "out.tsv"]).is_some());
/// assert!(parse_args(["annotate-variants", "variants.txt"]).is_none());
/// ```
pub fn parse_args<I, T>(args: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 3 {
        return None;
    }

    // Both values are taken verbatim, even when they look like flags or `--`
    args.insert(1, OsString::from("--"));
    Args::try_parse_from(args).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_arguments() {
        let args = parse_args(["annotate-variants", "variants.txt", "out.tsv"]).unwrap();
        assert_eq!(args.variants_file, PathBuf::from("variants.txt"));
        assert_eq!(args.output_file, PathBuf::from("out.tsv"));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse_args(["annotate-variants"]).is_none());
        assert!(parse_args(["annotate-variants", "variants.txt"]).is_none());
        assert!(parse_args(["annotate-variants", "a.txt", "b.tsv", "c.tsv"]).is_none());
    }

    #[test]
    fn test_flags_are_rejected() {
        assert!(parse_args(["annotate-variants", "--help"]).is_none());
        assert!(parse_args(["annotate-variants", "--version"]).is_none());
        assert!(parse_args(["annotate-variants", "-v", "a.txt", "b.tsv"]).is_none());
    }

    #[test]
    fn test_separator_counts_as_argument() {
        assert!(parse_args(["annotate-variants", "--", "a.txt", "b.tsv"]).is_none());
        assert!(parse_args(["annotate-variants", "--", "a.txt"]).is_some());
    }

    #[test]
    fn test_hyphen_values_are_paths() {
        let args = parse_args(["annotate-variants", "-variants.txt", "out.tsv"]).unwrap();
        assert_eq!(args.variants_file, PathBuf::from("-variants.txt"));
        assert_eq!(args.output_file, PathBuf::from("out.tsv"));

        let args = parse_args(["annotate-variants", "--help", "--"]).unwrap();
        assert_eq!(args.variants_file, PathBuf::from("--help"));
        assert_eq!(args.output_file, PathBuf::from("--"));
    }
}
