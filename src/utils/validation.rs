//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

/// Maximum number of sequences allowed in a single alignment (DOS protection)
pub const MAX_SEQUENCES: usize = 1_000_000;

/// Width of the name column in strict PHYLIP output
pub const PHYLIP_NAME_WIDTH: usize = 10;

/// Suffix of the VCF output
pub const VCF_SUFFIX: &str = ".vcf";

/// Suffix of the PHYLIP output
pub const PHYLIP_SUFFIX: &str = ".phylip";

/// Suffix of the SNP-only alignment output
pub const SNP_ALIGNMENT_SUFFIX: &str = ".snp_sites.aln";

/// Check if adding another sequence would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new sequence.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_sequence_limit(alignment.sample_count()).is_some() {
///     return Err(...);
/// }
/// alignment.push(sequence)?; // Safe to add
/// ```
#[must_use]
pub fn check_sequence_limit(count: usize) -> Option<String> {
    if count >= MAX_SEQUENCES {
        Some(format!(
            "Too many sequences: adding another would exceed maximum of {MAX_SEQUENCES}"
        ))
    } else {
        None
    }
}

/// Lay out a sample name for the strict PHYLIP name column.
///
/// Names longer than [`PHYLIP_NAME_WIDTH`] characters are truncated, shorter
/// ones are padded with spaces on the right.
///
/// # Examples
///
/// ```
/// use snp_sites::utils::validation::phylip_name;
///
/// assert_eq!(phylip_name("seq1"), "seq1      ");
/// assert_eq!(phylip_name("reference_sequence"), "reference_");
/// ```
#[must_use]
pub fn phylip_name(name: &str) -> String {
    let truncated: String = name.chars().take(PHYLIP_NAME_WIDTH).collect();
    format!("{truncated:<width$}", width = PHYLIP_NAME_WIDTH)
}

/// Append an output suffix to a prefix.
///
/// The suffix is appended to the full prefix, so `data/run.aln.gz` with
/// `.vcf` yields `data/run.aln.gz.vcf`.
#[must_use]
pub fn path_with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

/// Default output prefix for an input path: the file name, placed in the
/// current directory. Reading from stdin (`-`) gives `stdin`.
#[must_use]
pub fn default_output_prefix(input: &Path) -> PathBuf {
    if input == Path::new("-") {
        return PathBuf::from("stdin");
    }

    input
        .file_name()
        .map_or_else(|| PathBuf::from("snp_sites"), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sequence_limit() {
        assert!(check_sequence_limit(100).is_none());
        assert!(check_sequence_limit(MAX_SEQUENCES - 1).is_none());
        assert!(check_sequence_limit(MAX_SEQUENCES).is_some());
        assert!(check_sequence_limit(MAX_SEQUENCES + 1).is_some());
    }

    #[test]
    fn test_phylip_name() {
        assert_eq!(phylip_name(""), " ".repeat(10));
        assert_eq!(phylip_name("abcdefghij"), "abcdefghij");
        assert_eq!(phylip_name("abcdefghijk"), "abcdefghij");
        // Truncation counts characters, not bytes
        assert_eq!(phylip_name("αβγδεζηθικλμ"), "αβγδεζηθικ");
    }

    #[test]
    fn test_path_with_suffix() {
        let prefix = Path::new("data/run.aln.gz");
        assert_eq!(
            path_with_suffix(prefix, VCF_SUFFIX),
            PathBuf::from("data/run.aln.gz.vcf")
        );
        assert_eq!(
            path_with_suffix(prefix, PHYLIP_SUFFIX),
            PathBuf::from("data/run.aln.gz.phylip")
        );
        assert_eq!(
            path_with_suffix(prefix, SNP_ALIGNMENT_SUFFIX),
            PathBuf::from("data/run.aln.gz.snp_sites.aln")
        );
    }

    #[test]
    fn test_default_output_prefix() {
        assert_eq!(
            default_output_prefix(Path::new("/tmp/inputs/small.aln")),
            PathBuf::from("small.aln")
        );
        assert_eq!(default_output_prefix(Path::new("-")), PathBuf::from("stdin"));
    }
}
